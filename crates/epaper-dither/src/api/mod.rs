//! Public API for the epaper-dither crate.
//!
//! [`dither`] is the one-shot entry point; [`Ditherer`] bundles a palette,
//! mode and options for repeated use. [`DitherError`] is the unified error.

mod builder;
mod error;

pub use builder::{dither, Ditherer, PaletteSource};
pub use error::DitherError;
