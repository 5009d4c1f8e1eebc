//! Dithering engines.
//!
//! Three ways to turn a linear-light image into palette indices:
//!
//! - **Error diffusion** ([`diffuse`]): one generic engine driven by a
//!   [`Kernel`]. Serial by nature: each pixel depends on error pushed by the
//!   pixels visited before it.
//! - **Ordered** ([`ordered`]): 4x4 Bayer offsets, pixel-independent.
//! - **None** ([`nearest`]): plain nearest-color mapping.
//!
//! [`DitherMode`] picks one of these; [`dither_indices`] is the single
//! dispatch point.
//!
//! # Example
//!
//! ```
//! use epaper_dither::{dither_indices, ColorScheme, DitherMode, DitherOptions, LinearRgb};
//!
//! let pixels = vec![LinearRgb::new(0.2, 0.2, 0.2); 16];
//! let indices = dither_indices(
//!     &pixels,
//!     4,
//!     4,
//!     ColorScheme::Mono.palette(),
//!     DitherMode::Atkinson,
//!     &DitherOptions::new(),
//! );
//! assert_eq!(indices.len(), 16);
//! ```

mod diffusion;
mod direct;
mod kernel;
mod mode;
mod options;
mod ordered;

pub use diffusion::{diffuse, ErrorArena};
pub use direct::nearest;
pub use kernel::*;
pub use mode::DitherMode;
pub use options::DitherOptions;
pub use ordered::{ordered, ordered_pixel, threshold, BAYER_4X4};

use crate::color::LinearRgb;
use crate::palette::Palette;

/// Map a linear-light image onto `palette` with the given mode.
///
/// `image` must hold `width * height` pixels in row-major order. The result
/// has one index per pixel, each `< palette.len()`. `options.serpentine` is
/// only consulted by the error diffusion modes.
pub fn dither_indices(
    image: &[LinearRgb],
    width: usize,
    height: usize,
    palette: &Palette,
    mode: DitherMode,
    options: &DitherOptions,
) -> Vec<u8> {
    debug_assert_eq!(image.len(), width * height);
    match mode {
        DitherMode::None => nearest(image, palette),
        DitherMode::Ordered => ordered(image, width, height, palette),
        DitherMode::Burkes => diffuse(image, width, height, palette, &BURKES, options.serpentine),
        DitherMode::FloydSteinberg => diffuse(
            image,
            width,
            height,
            palette,
            &FLOYD_STEINBERG,
            options.serpentine,
        ),
        DitherMode::Atkinson => {
            diffuse(image, width, height, palette, &ATKINSON, options.serpentine)
        }
        DitherMode::Stucki => diffuse(image, width, height, palette, &STUCKI, options.serpentine),
        DitherMode::Sierra => diffuse(image, width, height, palette, &SIERRA, options.serpentine),
        DitherMode::SierraLite => {
            diffuse(image, width, height, palette, &SIERRA_LITE, options.serpentine)
        }
        DitherMode::JarvisJudiceNinke => diffuse(
            image,
            width,
            height,
            palette,
            &JARVIS_JUDICE_NINKE,
            options.serpentine,
        ),
    }
}
