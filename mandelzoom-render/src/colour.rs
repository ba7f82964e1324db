//! Mapping iteration results to RGB.
//!
//! Channel arithmetic is done in `f32`; the exact operation order matters
//! because the bounded palette is empirical and has no other reference.

use mandelzoom_core::{FractalParams, IterationResult};

use crate::buffer::Rgb;

/// Darkest gray an escaped pixel can get.
const MIN_GRAY: f32 = 0.1;

/// Convert a `[0, 1]` channel to a byte, rounding half up. NaN maps to 0.
#[inline]
fn channel_to_byte(v: f32) -> u8 {
    (v * 255.0 + 0.5) as u8
}

/// Upper clamp only. NaN is passed through.
#[inline]
fn clamp01(x: f32) -> f32 {
    if x > 1.0 {
        1.0
    } else {
        x
    }
}

/// Gray level for a pixel that escaped after `iterations` steps.
///
/// Fast escapes are bright, slow ones dark, never darker than [`MIN_GRAY`].
pub fn escape_colour(iterations: u32, max_iterations: u32) -> Rgb {
    let gray = (1.0 - iterations as f32 / max_iterations as f32).max(MIN_GRAY);
    let v = channel_to_byte(gray);
    [v, v, v]
}

/// Colour for a pixel that never escaped, from `|z|` at the final step.
pub fn bounded_colour(modulus: f64, escape_modulus: f64) -> Rgb {
    let factor = (modulus / escape_modulus) as f32;
    let incr = (f64::from(factor) * 3.5).log10() as f32;
    let b = clamp01((0.5 * factor + incr).abs());
    let r = clamp01((8.0 * incr).abs() * factor);
    let g = clamp01((6.0 * incr).abs() * factor);
    [channel_to_byte(r), channel_to_byte(g), channel_to_byte(b)]
}

pub fn colour_for(result: &IterationResult, params: &FractalParams) -> Rgb {
    match *result {
        IterationResult::Escaped { iterations, .. } => {
            escape_colour(iterations, params.max_iterations)
        }
        IterationResult::Bounded { modulus } => bounded_colour(modulus, params.escape_modulus),
    }
}
