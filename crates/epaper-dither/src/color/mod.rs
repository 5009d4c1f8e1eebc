//! Color types and conversion utilities
//!
//! Every conversion here is a pure, total function over its input domain.
//! The pipeline used for palette matching is:
//!
//! ```text
//! Rgb (8-bit sRGB) -> LinearRgb -> XYZ (D65) -> Lab -> Lch
//! ```
//!
//! Each step has an inverse so that values can be carried back to 8-bit
//! sRGB for output and for round-trip testing.
//!
//! # Example
//!
//! ```
//! use epaper_dither::{Lab, Lch, LinearRgb, Rgb};
//!
//! let red = Rgb::new(255, 0, 0);
//! let linear = LinearRgb::from(red);
//! let lab = Lab::from(linear);
//! let lch = Lch::from(lab);
//! assert!(lch.c > 100.0);
//!
//! let back = Rgb::from(lch.to_lab().to_linear());
//! assert_eq!(back, red);
//! ```

mod lab;
mod lch;
mod linear_rgb;
mod lut;
mod rgb;

pub use lab::Lab;
pub use lch::Lch;
pub use linear_rgb::LinearRgb;
pub use lut::{linear_to_srgb, srgb_to_linear};
pub use rgb::Rgb;
