//! Luminance compression into a palette's displayable range.
//!
//! A measured palette's "white" may reflect only 55% of the light pure white
//! would. Dithering a full-range image onto it forces huge errors in the
//! highlights and shadows. Remapping luminance from 0..1 into the palette's
//! black..white span first keeps those errors small.

use crate::color::LinearRgb;
use crate::palette::Palette;

/// Luminance at or below which a pixel is treated as pure black.
const NEAR_BLACK_Y: f32 = 1e-6;

/// Compress image luminance toward `palette`'s range, in place.
///
/// Display black and white are the luminances of the palette's darkest and
/// lightest entries. Each pixel's luminance `Y` is mapped to
/// `black + Y * (white - black)`, blended with the original by `strength`,
/// and RGB is scaled by `target / Y` so hue is kept. Pixels with no
/// luminance are set to the display black level times `strength`. Results
/// are clamped to 0.0..=1.0.
///
/// `strength <= 0` or a palette without a usable range leaves the pixels
/// untouched.
pub fn compress_tone(pixels: &mut [LinearRgb], palette: &Palette, strength: f32) {
    if strength.is_nan() || strength <= 0.0 {
        return;
    }
    let strength = strength.min(1.0);

    let linear = palette.linear_colors();
    let black_y = linear[palette.darkest_index()].luminance();
    let white_y = linear[palette.lightest_index()].luminance();
    let range = white_y - black_y;
    if range <= 0.0 {
        return;
    }

    for pixel in pixels.iter_mut() {
        let y = pixel.luminance();
        *pixel = if y > NEAR_BLACK_Y {
            let compressed = black_y + y * range;
            let target = y + strength * (compressed - y);
            pixel.scale(target / y).clamped()
        } else {
            let level = black_y * strength;
            LinearRgb::new(level, level, level).clamped()
        };
    }
}
