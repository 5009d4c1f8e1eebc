// Generated LUT tables carry more digits than f32 holds.
#![allow(clippy::excessive_precision, clippy::module_inception)]

//! epaper-dither: palette-constrained dithering for e-paper displays
//!
//! Turns a truecolor RGBA image into one palette index per pixel, where the
//! palette is either a built-in [`ColorScheme`] (the order display firmware
//! expects) or a measured [`Palette`] describing what a panel really shows.
//!
//! # Quick Start
//!
//! ```
//! use epaper_dither::{dither, ColorScheme, DitherMode, DitherOptions, ImageBuffer};
//!
//! let image = ImageBuffer::filled(16, 16, [128, 128, 128, 255]);
//! let result = dither(&image, ColorScheme::Mono, DitherMode::Burkes, &DitherOptions::new()).unwrap();
//!
//! assert_eq!(result.width(), 16);
//! assert!(result.indices().iter().all(|&i| i < 2));
//! ```
//!
//! For repeated calls with the same settings use [`Ditherer`]:
//!
//! ```
//! use epaper_dither::{DitherMode, Ditherer, ImageBuffer, MeasuredDisplay};
//!
//! let ditherer = Ditherer::new(&MeasuredDisplay::Bwry4_2.palette())
//!     .mode(DitherMode::Atkinson)
//!     .tone_compression(0.8);
//! let result = ditherer.dither(&ImageBuffer::filled(4, 4, [250, 200, 10, 255])).unwrap();
//! assert_eq!(result.palette().len(), 4);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RGBA bytes
//!     |
//!     v
//! flatten over white          (alpha compositing, 8-bit)
//!     |
//!     v
//! LinearRgb                   (gamma decode via LUT)
//!     |
//!     v
//! [tone compression]          (optional, luminance only)
//!     |
//!     v
//! dither_indices
//!     |-- None:     nearest color per pixel
//!     |-- Ordered:  4x4 Bayer offset, then nearest
//!     '-- Kernels:  error diffusion in linear light,
//!                   matching in LCh
//!     |
//!     v
//! PaletteImageBuffer          (indices + palette)
//! ```
//!
//! # Color Science
//!
//! Two spaces do two different jobs:
//!
//! - **Linear RGB** carries quantization error. Light adds linearly, so the
//!   difference between the wanted color and the chosen ink only makes
//!   physical sense here.
//! - **CIE LCh** decides which ink is closest. The metric in [`matcher`]
//!   weights lightness over chroma over hue, and scales the hue term by
//!   both chromas so a gray pixel never picks an ink because of its
//!   unstable hue angle.
//!
//! Ordered dithering adds its Bayer offsets on the 8-bit sRGB scale instead,
//! where a fixed offset is roughly a fixed perceived step.
//!
//! # Palette Order
//!
//! Index `i` in the output means "hardware color `i`". The registry fixes
//! the order per scheme:
//!
//! | Scheme | Value | Order |
//! |--------|-------|-------|
//! | Mono | 0 | black, white |
//! | Bwr | 1 | black, white, red |
//! | Bwy | 2 | black, white, yellow |
//! | Bwry | 3 | black, white, yellow, red |
//! | Bwgbry | 4 | black, white, yellow, red, blue, green |
//! | Grayscale4 | 5 | black, gray1, gray2, white |

pub mod api;
pub mod color;
pub mod dither;
pub mod image;
pub mod matcher;
pub mod output;
pub mod palette;
pub mod preprocess;

#[cfg(test)]
mod domain_tests;

pub use api::{dither, DitherError, Ditherer, PaletteSource};
pub use color::{Lab, Lch, LinearRgb, Rgb};
pub use dither::{dither_indices, DitherMode, DitherOptions, Kernel};
pub use image::ImageBuffer;
pub use matcher::{closest_index, closest_index_lch, closest_index_linear, lch_distance};
pub use output::PaletteImageBuffer;
pub use palette::{ColorScheme, MeasuredDisplay, Palette, PaletteError, ParseColorError};
pub use preprocess::{compress_tone, flatten_to_rgb};
