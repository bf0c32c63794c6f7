//! Bulb output abstraction
//!
//! [`BulbDriver`] is the hardware seam: implement it to drive the real PWM
//! channels. [`Bulb`] wraps a driver with the last applied state and clamps
//! incoming command arguments before they reach hardware.

use crate::color::{Rgb, hsv_to_rgb};

/// Abstract bulb output driver.
///
/// Implement this trait to support different hardware platforms.
/// The console is generic over this trait.
pub trait BulbDriver {
    /// Drive the three color channel intensity signals.
    fn set_rgb(&mut self, color: Rgb);

    /// Drive the tone output. `0` silences it.
    #[cfg(feature = "tone")]
    fn set_tone(&mut self, freq_hz: u16);
}

/// Clamp a parsed channel argument to the 8-bit intensity range.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// The bulb session state: driver plus the last applied outputs.
pub struct Bulb<D: BulbDriver> {
    driver: D,
    color: Rgb,
    #[cfg(feature = "tone")]
    tone_hz: u16,
}

impl<D: BulbDriver> Bulb<D> {
    /// Create a dark, silent bulb over `driver`.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            color: Rgb { r: 0, g: 0, b: 0 },
            #[cfg(feature = "tone")]
            tone_hz: 0,
        }
    }

    /// Set the color channels, each independently clamped to `[0, 255]`.
    ///
    /// Fire-and-forget: invalid input is clamped, never rejected.
    pub fn set_color(&mut self, r: i32, g: i32, b: i32) {
        let color = Rgb {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        };
        self.color = color;
        self.driver.set_rgb(color);
    }

    /// Set the color from an HSV triple.
    pub fn set_hsv(&mut self, h: i32, s: i32, v: i32) {
        let color = hsv_to_rgb(h, s, v);
        self.set_color(i32::from(color.r), i32::from(color.g), i32::from(color.b));
    }

    /// Set the tone frequency in Hz, clamped to `[0, 65535]`. `0` silences.
    #[cfg(feature = "tone")]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_tone(&mut self, freq: i32) {
        let hz = freq.clamp(0, i32::from(u16::MAX)) as u16;
        self.tone_hz = hz;
        self.driver.set_tone(hz);
    }

    /// Last applied color.
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Last applied tone frequency, `0` when silent.
    #[cfg(feature = "tone")]
    pub fn tone_hz(&self) -> u16 {
        self.tone_hz
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
