//! Ordered (Bayer) dithering.
//!
//! Every pixel is handled on its own: a position-dependent offset is added
//! to each 8-bit sRGB channel, the result is clamped to 0..=255 and matched.
//! No state crosses pixels, so rows may be processed in any order or in
//! parallel.
//!
//! Offsets are centered on zero and stay inside half the black-to-white
//! distance, so pixels that already equal a palette color never flip.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::color::{linear_to_srgb, srgb_to_linear, LinearRgb};
use crate::matcher::closest_index_linear;
use crate::palette::Palette;

/// 4x4 Bayer threshold levels.
pub const BAYER_4X4: [[u8; 4]; 4] = [
    [0, 8, 2, 10],
    [12, 4, 14, 6],
    [3, 11, 1, 9],
    [15, 7, 13, 5],
];

/// Spacing between threshold levels on the 0..=255 scale.
const LEVEL_STEP: f32 = 15.0;

/// Offset centering the levels around zero: 0..=225 becomes -112.5..=112.5.
const LEVEL_BIAS: f32 = 112.5;

/// Signed offset (on the 8-bit channel scale) applied at pixel `(x, y)`.
#[inline]
pub fn threshold(x: usize, y: usize) -> f32 {
    BAYER_4X4[y % 4][x % 4] as f32 * LEVEL_STEP - LEVEL_BIAS
}

/// Palette index for one pixel.
#[inline]
pub fn ordered_pixel(color: LinearRgb, x: usize, y: usize, palette: &Palette) -> u8 {
    let t = threshold(x, y);
    let shift = |v: f32| {
        let code = (linear_to_srgb(v) * 255.0 + t).clamp(0.0, 255.0);
        srgb_to_linear(code / 255.0)
    };
    let shifted = LinearRgb::new(shift(color.r), shift(color.g), shift(color.b));
    closest_index_linear(shifted, palette) as u8
}

fn ordered_row(row: &[LinearRgb], y: usize, palette: &Palette, out: &mut [u8]) {
    for (x, (&color, slot)) in row.iter().zip(out.iter_mut()).enumerate() {
        *slot = ordered_pixel(color, x, y, palette);
    }
}

/// Ordered-dither a linear-light image.
pub fn ordered(image: &[LinearRgb], width: usize, height: usize, palette: &Palette) -> Vec<u8> {
    let mut output = vec![0u8; width * height];
    if width == 0 {
        return output;
    }

    #[cfg(feature = "parallel")]
    output
        .par_chunks_mut(width)
        .zip(image.par_chunks(width))
        .enumerate()
        .for_each(|(y, (out, row))| ordered_row(row, y, palette, out));

    #[cfg(not(feature = "parallel"))]
    for (y, (out, row)) in output
        .chunks_mut(width)
        .zip(image.chunks(width))
        .enumerate()
    {
        ordered_row(row, y, palette, out);
    }

    output
}
