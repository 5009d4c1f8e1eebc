//! Palette definition files.
//!
//! A palette file names one or more measured palettes:
//!
//! ```yaml
//! palettes:
//!   kitchen:
//!     scheme: bwry
//!     accent: red
//!     colors:
//!       - { name: black, color: "#050505" }
//!       - { name: white, color: "#C8C8C8" }
//!       - { name: yellow, color: "#C8B400" }
//!       - { name: red, color: "#780F05" }
//!     range: { black: 0, white: 255 }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use epaper_dither::{ColorScheme, Palette, PaletteError, Rgb};
use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PaletteFile {
    #[serde(default)]
    pub palettes: BTreeMap<String, PaletteConfig>,
}

/// One named palette as written in the file.
#[derive(Debug, Deserialize, Clone)]
pub struct PaletteConfig {
    /// Entries in index order.
    pub colors: Vec<ColorEntry>,

    /// Name of the accent entry.
    pub accent: String,

    /// Scheme this palette stands in for (name or firmware value).
    #[serde(default)]
    pub scheme: Option<String>,

    /// Stretch the measured black..white span onto this range on load.
    #[serde(default)]
    pub range: Option<RangeConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ColorEntry {
    pub name: String,
    /// `#RRGGBB` or `#RGB`
    pub color: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RangeConfig {
    pub black: u8,
    pub white: u8,
}

impl PaletteFile {
    /// Read and parse a palette file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        let file = Self::parse(&content)?;
        tracing::info!(
            path = %path.display(),
            palettes = file.palettes.len(),
            "Loaded palette file"
        );
        Ok(file)
    }

    pub fn parse(content: &str) -> Result<Self, AppError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Names of all defined palettes, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.palettes.keys().map(String::as_str).collect()
    }

    /// Build the palette called `name`.
    pub fn palette(&self, name: &str) -> Result<Palette, AppError> {
        let config = self
            .palettes
            .get(name)
            .ok_or_else(|| AppError::UnknownPalette {
                name: name.to_string(),
                available: self.names().join(", "),
            })?;
        config.build(name)
    }
}

impl PaletteConfig {
    /// Scheme this palette substitutes for, if any.
    pub fn scheme(&self) -> Result<Option<ColorScheme>, AppError> {
        Ok(self
            .scheme
            .as_deref()
            .map(str::parse::<ColorScheme>)
            .transpose()?)
    }

    /// Validate the entries and produce a palette. `label` only appears in
    /// log output.
    pub fn build(&self, label: &str) -> Result<Palette, AppError> {
        let entries = self
            .colors
            .iter()
            .map(|e| Ok((e.name.as_str(), e.color.parse::<Rgb>()?)))
            .collect::<Result<Vec<_>, PaletteError>>()?;

        let scheme = self.scheme()?;
        let palette = Palette::measured(&entries, &self.accent, scheme)?;

        if let Some(scheme) = scheme {
            if !palette.matches_scheme_order(scheme) {
                tracing::warn!(
                    palette = label,
                    %scheme,
                    expected = ?scheme.color_names(),
                    "Palette entries are not in the scheme's firmware order"
                );
            }
        }

        let palette = match self.range {
            Some(RangeConfig { black, white }) if black >= white => {
                return Err(AppError::Config(format!(
                    "palette '{label}': range black ({black}) must be below white ({white})"
                )));
            }
            Some(RangeConfig { black, white }) => palette.compress(black, white),
            None => palette,
        };

        tracing::debug!(
            palette = label,
            colors = palette.len(),
            accent = palette.accent_name(),
            "Built palette"
        );
        Ok(palette)
    }
}
