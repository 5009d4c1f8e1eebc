//! Unified error type for the epaper-dither public API.

use thiserror::Error;

use crate::palette::{PaletteError, ParseColorError};

/// Every way a dithering call can fail.
///
/// A call either fails up front with one of these or returns a complete
/// result; there is no partial output.
///
/// # Example
///
/// ```
/// use epaper_dither::{DitherError, Palette};
///
/// fn create_palette() -> Result<Palette, DitherError> {
///     let palette = Palette::from_hex(&[("black", "#000000"), ("white", "#FFFFFF")], "black")?;
///     Ok(palette)
/// }
/// # assert!(create_palette().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DitherError {
    /// Invalid palette, scheme value or mode
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),

    /// Image byte length does not match its dimensions
    #[error("malformed image buffer: {width}x{height} needs {expected} bytes, got {actual}")]
    MalformedBuffer {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    /// A palette index with no matching palette entry
    #[error("palette index {index} out of range for {colors} colors")]
    IndexOutOfPalette { index: u8, colors: usize },
}

impl From<ParseColorError> for DitherError {
    fn from(err: ParseColorError) -> Self {
        DitherError::Palette(PaletteError::ParseColor(err))
    }
}
