//! Integer HSV to RGB conversion
//!
//! Uses 256-scaled integer arithmetic only; no floating point is involved so
//! results are bit-exact across targets.

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Convert an HSV triple to RGB.
///
/// `h` is in degrees, conventionally `[0, 360)`; `s` and `v` are `[0, 255]`.
/// Inputs are not range-checked: out-of-domain values run through the same
/// arithmetic (`h % 60`, truncating divisions) and yield a deterministic but
/// unspecified color. Callers pre-normalize `h` or accept the result.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[allow(clippy::many_single_char_names)]
pub fn hsv_to_rgb(h: i32, s: i32, v: i32) -> Rgb {
    if s == 0 {
        // Achromatic: all channels carry the value.
        let v = v as u8;
        return Rgb { r: v, g: v, b: v };
    }

    // Fractional position inside the 60 degree sector, scaled to 0-255.
    let f = ((h % 60) * 255) / 60;
    let sector = h / 60;

    let p = (v * (256 - s)) / 256;
    let q = (v * (256 - (s * f) / 256)) / 256;
    let t = (v * (256 - (s * (256 - f)) / 256)) / 256;

    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb {
        r: r as u8,
        g: g as u8,
        b: b as u8,
    }
}
