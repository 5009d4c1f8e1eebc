//! Error types for palette operations
//!
//! This module provides error types for color parsing, palette validation
//! and scheme/mode lookup.

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for palette construction and scheme lookup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// No colors provided in palette
    #[error("palette cannot be empty")]
    EmptyPalette,

    /// More entries than an 8-bit index can address
    #[error("palette has {count} colors, at most 256 are supported")]
    TooManyColors { count: usize },

    /// The same color name appears twice
    #[error("duplicate color name '{name}' at index {index}")]
    DuplicateName { name: String, index: usize },

    /// The accent does not name any color in the palette
    #[error("accent color '{accent}' is not one of the palette colors")]
    UnknownAccent { accent: String },

    /// A palette substituted for a scheme has the wrong number of colors
    #[error("{scheme} expects {expected} colors, palette has {actual}")]
    ColorCountMismatch {
        scheme: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Firmware scheme value outside 0..=5
    #[error("invalid color scheme value: {0}")]
    InvalidSchemeValue(i64),

    /// Scheme name that matches no known scheme
    #[error("unknown color scheme '{0}'")]
    UnknownScheme(String),

    /// Name that matches no built-in measured display
    #[error("unknown measured display '{0}'")]
    UnknownDisplay(String),

    /// Dither mode name or firmware value that matches no known mode
    #[error("unknown dither mode '{0}'")]
    UnknownMode(String),

    /// Invalid hex color string
    #[error("invalid color: {0}")]
    ParseColor(#[from] ParseColorError),
}
