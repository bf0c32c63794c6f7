//! Decorative blocking effects
//!
//! Fades and the hue-cycle demo busy-wait between steps. They are not part
//! of the command protocol and never run concurrently with the console;
//! timing goes through `embedded_hal::delay::DelayNs` so the effects stay
//! hardware-agnostic.

use embedded_hal::delay::DelayNs;

use crate::bulb::{Bulb, BulbDriver};
use crate::color::Rgb;

/// Delay between fade steps.
const FADE_STEP_MS: u32 = 20;

/// Delay between hue-cycle steps.
const HUE_STEP_MS: u32 = 10;

/// Fade from black up to `color` in 256 linear steps.
pub fn fade_in<D: BulbDriver>(bulb: &mut Bulb<D>, delay: &mut impl DelayNs, color: Rgb) {
    for step in 0..=255 {
        bulb.set_color(
            i32::from(color.r) * step / 255,
            i32::from(color.g) * step / 255,
            i32::from(color.b) * step / 255,
        );
        delay.delay_ms(FADE_STEP_MS);
    }
}

/// Fade from `color` down to black in 256 linear steps.
pub fn fade_out<D: BulbDriver>(bulb: &mut Bulb<D>, delay: &mut impl DelayNs, color: Rgb) {
    for step in (0..=255).rev() {
        bulb.set_color(
            i32::from(color.r) * step / 255,
            i32::from(color.g) * step / 255,
            i32::from(color.b) * step / 255,
        );
        delay.delay_ms(FADE_STEP_MS);
    }
}

/// Sweep the full hue circle at full saturation and value.
pub fn hue_cycle<D: BulbDriver>(bulb: &mut Bulb<D>, delay: &mut impl DelayNs) {
    for h in 0..360 {
        bulb.set_hsv(h, 255, 255);
        delay.delay_ms(HUE_STEP_MS);
    }
}

/// Pick a random fully saturated color, never black.
///
/// Each channel is independently either 0 or 255; all-dark draws are
/// re-rolled.
#[allow(clippy::cast_possible_truncation)]
pub fn random_color(mut rand: impl FnMut() -> u32) -> Rgb {
    loop {
        let r = (rand() % 2) * 255;
        let g = (rand() % 2) * 255;
        let b = (rand() % 2) * 255;

        if r + g + b != 0 {
            return Rgb {
                r: r as u8,
                g: g as u8,
                b: b as u8,
            };
        }
    }
}
