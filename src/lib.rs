//! Inkmap - dither images onto e-paper display palettes.
//!
//! Thin application layer over `epaper-dither`: PNG decoding, palette
//! definition files and indexed PNG output. This library exposes modules
//! for integration testing.

pub mod config;
pub mod error;
pub mod image_io;
pub mod pipeline;
