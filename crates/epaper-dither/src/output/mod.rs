//! Output types for the dithering pipeline.
//!
//! [`PaletteImageBuffer`] is the only thing a dithering call returns: the
//! index raster together with the palette it was produced against.

mod palette_image;

pub use palette_image::PaletteImageBuffer;
