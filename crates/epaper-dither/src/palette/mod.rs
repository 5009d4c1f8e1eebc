//! Palettes, the color scheme registry and measured display presets
//!
//! A [`Palette`] is an ordered list of named colors with one accent. The
//! order is part of the wire contract with display firmware: index `i` in a
//! dithered image means "hardware color `i`". The [`ColorScheme`] registry
//! fixes that order for each supported panel family; measured palettes from
//! [`MeasuredDisplay`] keep the order of the scheme they stand in for.

mod error;
mod measured;
mod palette;
mod scheme;

pub use error::{PaletteError, ParseColorError};
pub use measured::MeasuredDisplay;
pub use palette::Palette;
pub use scheme::ColorScheme;
