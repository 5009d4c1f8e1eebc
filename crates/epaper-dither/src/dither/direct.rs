//! Nearest-color mapping without dithering.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::color::LinearRgb;
use crate::matcher::closest_index_linear;
use crate::palette::Palette;

/// Map every pixel to its closest palette entry.
pub fn nearest(image: &[LinearRgb], palette: &Palette) -> Vec<u8> {
    #[cfg(feature = "parallel")]
    let iter = image.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = image.iter();

    iter.map(|&c| closest_index_linear(c, palette) as u8).collect()
}
