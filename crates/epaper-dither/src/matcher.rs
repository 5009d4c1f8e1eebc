//! Perceptual nearest-color matching
//!
//! Distances are measured in CIE LCh with a weighted metric:
//!
//! ```text
//! d = sqrt((WL * dL)^2 + (WC * dC)^2 + WH^2 * dH^2)
//! dH^2 = 2 * C1 * C2 * (1 - cos(h1 - h2))
//! ```
//!
//! `dH` is the CIE hue difference. It scales with the product of the two
//! chromas, so the hue angle of a near-gray color contributes almost nothing:
//! its hue is numerically unstable and perceptually meaningless. Lightness
//! carries the most weight because reflective panels reproduce tone far
//! better than hue.
//!
//! The metric is non-negative, symmetric, and zero only for identical
//! colors. Ties resolve to the lowest palette index.

use crate::color::{Lab, Lch, LinearRgb, Rgb};
use crate::palette::Palette;

/// Lightness weight.
pub const WEIGHT_L: f32 = 1.0;
/// Chroma weight.
pub const WEIGHT_C: f32 = 0.75;
/// Hue weight.
pub const WEIGHT_H: f32 = 0.5;

/// Squared hue difference between two LCh colors.
#[inline]
fn hue_difference_sq(a: Lch, b: Lch) -> f32 {
    let cos = (a.h - b.h).to_radians().cos();
    // rounding can leave cos a hair above 1.0
    (2.0 * a.c * b.c * (1.0 - cos)).max(0.0)
}

/// Squared weighted distance; what the search loop compares.
#[inline]
fn distance_sq(a: Lch, b: Lch) -> f32 {
    let dl = WEIGHT_L * (a.l - b.l);
    let dc = WEIGHT_C * (a.c - b.c);
    dl * dl + dc * dc + WEIGHT_H * WEIGHT_H * hue_difference_sq(a, b)
}

/// Weighted perceptual distance between two LCh colors.
#[inline]
pub fn lch_distance(a: Lch, b: Lch) -> f32 {
    distance_sq(a, b).sqrt()
}

/// Index of the palette entry closest to `color`.
///
/// Strict `<` keeps the first of several equally distant entries.
pub fn closest_index_lch(color: Lch, palette: &Palette) -> usize {
    let mut best_index = 0;
    let mut best_distance = f32::INFINITY;

    for (i, &entry) in palette.lch_colors().iter().enumerate() {
        let d = distance_sq(color, entry);
        if d < best_distance {
            best_distance = d;
            best_index = i;
        }
    }

    best_index
}

/// Index of the palette entry closest to a linear-light color.
///
/// Accepts values outside 0.0..=1.0, which is what the diffusion engine
/// produces once error has accumulated.
#[inline]
pub fn closest_index_linear(color: LinearRgb, palette: &Palette) -> usize {
    closest_index_lch(Lch::from(Lab::from(color)), palette)
}

/// Index of the palette entry closest to an 8-bit sRGB color.
///
/// ```
/// use epaper_dither::{closest_index, ColorScheme, Rgb};
///
/// let palette = ColorScheme::Bwr.palette();
/// assert_eq!(closest_index(Rgb::new(200, 30, 20), palette), 2);
/// assert_eq!(closest_index(Rgb::new(240, 240, 240), palette), 1);
/// ```
#[inline]
pub fn closest_index(color: Rgb, palette: &Palette) -> usize {
    closest_index_lch(color.to_lch(), palette)
}
