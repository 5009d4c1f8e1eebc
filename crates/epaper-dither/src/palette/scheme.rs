//! Built-in color schemes
//!
//! Scheme values are the integers display firmware uses to describe its
//! panel; they are a wire contract and never change.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use super::error::PaletteError;
use super::palette::Palette;
use crate::color::Rgb;

const BLACK: (&str, Rgb) = ("black", Rgb::BLACK);
const WHITE: (&str, Rgb) = ("white", Rgb::WHITE);
const RED: (&str, Rgb) = ("red", Rgb::new(255, 0, 0));
const YELLOW: (&str, Rgb) = ("yellow", Rgb::new(255, 255, 0));
const BLUE: (&str, Rgb) = ("blue", Rgb::new(0, 0, 255));
const GREEN: (&str, Rgb) = ("green", Rgb::new(0, 255, 0));
const GRAY1: (&str, Rgb) = ("gray1", Rgb::new(85, 85, 85));
const GRAY2: (&str, Rgb) = ("gray2", Rgb::new(170, 170, 170));

// Entry order follows the panel controller's color codes:
// black=0, white=1, yellow=2, red=3, blue=4, green=5.
const MONO_COLORS: &[(&str, Rgb)] = &[BLACK, WHITE];
const BWR_COLORS: &[(&str, Rgb)] = &[BLACK, WHITE, RED];
const BWY_COLORS: &[(&str, Rgb)] = &[BLACK, WHITE, YELLOW];
const BWRY_COLORS: &[(&str, Rgb)] = &[BLACK, WHITE, YELLOW, RED];
const BWGBRY_COLORS: &[(&str, Rgb)] = &[BLACK, WHITE, YELLOW, RED, BLUE, GREEN];
const GRAYSCALE_4_COLORS: &[(&str, Rgb)] = &[BLACK, GRAY1, GRAY2, WHITE];

/// A display color scheme with its canonical theoretical palette.
///
/// ```
/// use epaper_dither::ColorScheme;
///
/// let scheme = ColorScheme::from_value(1).unwrap();
/// assert_eq!(scheme, ColorScheme::Bwr);
/// assert_eq!(scheme.color_count(), 3);
/// assert_eq!(scheme.palette().accent_name(), "red");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ColorScheme {
    /// Black and white
    Mono = 0,
    /// Black, white, red
    Bwr = 1,
    /// Black, white, yellow
    Bwy = 2,
    /// Black, white, yellow, red
    Bwry = 3,
    /// Six-color panels: black, white, yellow, red, blue, green
    Bwgbry = 4,
    /// Four gray levels
    Grayscale4 = 5,
}

impl ColorScheme {
    /// Every scheme, in firmware value order.
    pub const ALL: [ColorScheme; 6] = [
        ColorScheme::Mono,
        ColorScheme::Bwr,
        ColorScheme::Bwy,
        ColorScheme::Bwry,
        ColorScheme::Bwgbry,
        ColorScheme::Grayscale4,
    ];

    /// Firmware integer value.
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Look up a scheme by firmware value.
    ///
    /// # Errors
    ///
    /// [`PaletteError::InvalidSchemeValue`] for anything outside 0..=5.
    pub fn from_value(value: i64) -> Result<Self, PaletteError> {
        usize::try_from(value)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(PaletteError::InvalidSchemeValue(value))
    }

    pub const fn name(self) -> &'static str {
        match self {
            ColorScheme::Mono => "MONO",
            ColorScheme::Bwr => "BWR",
            ColorScheme::Bwy => "BWY",
            ColorScheme::Bwry => "BWRY",
            ColorScheme::Bwgbry => "BWGBRY",
            ColorScheme::Grayscale4 => "GRAYSCALE_4",
        }
    }

    fn theoretical(self) -> &'static [(&'static str, Rgb)] {
        match self {
            ColorScheme::Mono => MONO_COLORS,
            ColorScheme::Bwr => BWR_COLORS,
            ColorScheme::Bwy => BWY_COLORS,
            ColorScheme::Bwry => BWRY_COLORS,
            ColorScheme::Bwgbry => BWGBRY_COLORS,
            ColorScheme::Grayscale4 => GRAYSCALE_4_COLORS,
        }
    }

    pub const fn accent_name(self) -> &'static str {
        match self {
            ColorScheme::Mono | ColorScheme::Grayscale4 => "black",
            ColorScheme::Bwr | ColorScheme::Bwry | ColorScheme::Bwgbry => "red",
            ColorScheme::Bwy => "yellow",
        }
    }

    /// Number of colors the panel can show.
    #[inline]
    pub fn color_count(self) -> usize {
        self.theoretical().len()
    }

    /// Canonical color names in index order.
    pub fn color_names(self) -> Vec<&'static str> {
        self.theoretical().iter().map(|&(name, _)| name).collect()
    }

    /// The scheme's theoretical palette, built once and shared.
    pub fn palette(self) -> &'static Palette {
        static REGISTRY: OnceLock<Vec<Palette>> = OnceLock::new();
        let registry = REGISTRY.get_or_init(|| {
            Self::ALL
                .iter()
                .map(|&scheme| {
                    let colors = scheme.theoretical();
                    let accent = colors
                        .iter()
                        .position(|&(name, _)| name == scheme.accent_name())
                        .unwrap_or(0);
                    Palette::assemble(
                        colors.iter().map(|&(n, _)| n.to_string()).collect(),
                        colors.iter().map(|&(_, c)| c).collect(),
                        accent,
                    )
                })
                .collect()
        });
        &registry[self as usize]
    }
}

impl TryFrom<i64> for ColorScheme {
    type Error = PaletteError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorScheme {
    type Err = PaletteError;

    /// Accepts the scheme name in any case, with `-` or `_`, or its firmware
    /// value (`"bwr"`, `"GRAYSCALE-4"`, `"3"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(value) = s.parse::<i64>() {
            return Self::from_value(value);
        }
        let wanted = s.to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|scheme| scheme.name() == wanted)
            .ok_or_else(|| PaletteError::UnknownScheme(s.to_string()))
    }
}
