//! Named, ordered palette with precomputed matching representations.

use std::collections::HashSet;

use super::error::PaletteError;
use super::scheme::ColorScheme;
use crate::color::{Lch, LinearRgb, Rgb};

/// Output indices are one byte each.
const MAX_COLORS: usize = 256;

/// An ordered set of named display colors plus one accent color.
///
/// Index order is significant: consumers map palette index to a hardware
/// color code, so two palettes with the same colors in a different order are
/// different palettes.
///
/// # Precomputation
///
/// Color space conversions are done once at construction:
/// - `Rgb` (for output)
/// - `LinearRgb` (for error diffusion)
/// - `Lch` (for perceptual matching)
///
/// A palette never changes after construction and can be shared freely
/// between threads and dithering calls.
///
/// # Example
///
/// ```
/// use epaper_dither::{Palette, Rgb};
///
/// let palette = Palette::new(
///     &[("black", Rgb::BLACK), ("white", Rgb::WHITE), ("red", Rgb::new(255, 0, 0))],
///     "red",
/// )
/// .unwrap();
///
/// assert_eq!(palette.len(), 3);
/// assert_eq!(palette.accent_index(), 2);
/// assert_eq!(palette.index_of("white"), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    names: Vec<String>,
    colors: Vec<Rgb>,
    linear: Vec<LinearRgb>,
    lch: Vec<Lch>,
    accent: usize,
}

impl Palette {
    /// Create a palette from `(name, color)` pairs and the accent's name.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `entries` is empty
    /// - [`PaletteError::TooManyColors`] beyond 256 entries
    /// - [`PaletteError::DuplicateName`] if a name occurs twice
    /// - [`PaletteError::UnknownAccent`] if `accent` names no entry
    pub fn new<N: AsRef<str>>(entries: &[(N, Rgb)], accent: &str) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        if entries.len() > MAX_COLORS {
            return Err(PaletteError::TooManyColors {
                count: entries.len(),
            });
        }

        let mut seen = HashSet::new();
        for (index, (name, _)) in entries.iter().enumerate() {
            if !seen.insert(name.as_ref()) {
                return Err(PaletteError::DuplicateName {
                    name: name.as_ref().to_string(),
                    index,
                });
            }
        }

        let accent_index = entries
            .iter()
            .position(|(name, _)| name.as_ref() == accent)
            .ok_or_else(|| PaletteError::UnknownAccent {
                accent: accent.to_string(),
            })?;

        Ok(Self::assemble(
            entries.iter().map(|(n, _)| n.as_ref().to_string()).collect(),
            entries.iter().map(|&(_, c)| c).collect(),
            accent_index,
        ))
    }

    /// Build a palette from measured colors, optionally standing in for a
    /// known scheme.
    ///
    /// When `substitutes` is given the color count must equal the scheme's.
    /// Name order is not checked here; see [`Palette::matches_scheme_order`].
    ///
    /// # Errors
    ///
    /// Everything [`Palette::new`] returns, plus
    /// [`PaletteError::ColorCountMismatch`].
    pub fn measured<N: AsRef<str>>(
        colors: &[(N, Rgb)],
        accent: &str,
        substitutes: Option<ColorScheme>,
    ) -> Result<Self, PaletteError> {
        let palette = Self::new(colors, accent)?;
        if let Some(scheme) = substitutes {
            if palette.len() != scheme.color_count() {
                return Err(PaletteError::ColorCountMismatch {
                    scheme: scheme.name(),
                    expected: scheme.color_count(),
                    actual: palette.len(),
                });
            }
        }
        Ok(palette)
    }

    /// Create a palette from `(name, hex)` pairs.
    ///
    /// ```
    /// use epaper_dither::Palette;
    ///
    /// let palette = Palette::from_hex(&[("black", "#000"), ("white", "#FFFFFF")], "black").unwrap();
    /// assert_eq!(palette.len(), 2);
    /// ```
    pub fn from_hex(entries: &[(&str, &str)], accent: &str) -> Result<Self, PaletteError> {
        let parsed = entries
            .iter()
            .map(|&(name, hex)| Ok((name, hex.parse::<Rgb>()?)))
            .collect::<Result<Vec<_>, PaletteError>>()?;
        Self::new(&parsed, accent)
    }

    /// Construct from already-validated parts.
    pub(crate) fn assemble(names: Vec<String>, colors: Vec<Rgb>, accent: usize) -> Self {
        let linear: Vec<LinearRgb> = colors.iter().map(|&c| LinearRgb::from(c)).collect();
        let lch: Vec<Lch> = colors.iter().map(|&c| c.to_lch()).collect();
        Self {
            names,
            colors,
            linear,
            lch,
            accent,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false` for a constructed palette.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    #[inline]
    pub fn color(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Linear RGB for every entry, in palette order.
    #[inline]
    pub fn linear_colors(&self) -> &[LinearRgb] {
        &self.linear
    }

    /// LCh for every entry, in palette order.
    #[inline]
    pub fn lch_colors(&self) -> &[Lch] {
        &self.lch
    }

    /// Iterate `(name, color)` pairs in palette order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Rgb)> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.colors.iter().copied())
    }

    /// Position of the color called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    #[inline]
    pub fn accent_name(&self) -> &str {
        &self.names[self.accent]
    }

    #[inline]
    pub fn accent_index(&self) -> usize {
        self.accent
    }

    #[inline]
    pub fn accent_color(&self) -> Rgb {
        self.colors[self.accent]
    }

    /// Palette as flat `[r, g, b, r, g, b, ...]` bytes.
    pub fn to_flat_rgb(&self) -> Vec<u8> {
        self.colors.iter().flat_map(|c| c.to_bytes()).collect()
    }

    /// Index of the entry with the lowest luminance (first one on ties).
    pub fn darkest_index(&self) -> usize {
        self.extreme_index(|y, best| y < best)
    }

    /// Index of the entry with the highest luminance (first one on ties).
    pub fn lightest_index(&self) -> usize {
        self.extreme_index(|y, best| y > best)
    }

    fn extreme_index(&self, better: impl Fn(f32, f32) -> bool) -> usize {
        let mut best = 0;
        let mut best_y = self.linear[0].luminance();
        for (i, c) in self.linear.iter().enumerate().skip(1) {
            let y = c.luminance();
            if better(y, best_y) {
                best = i;
                best_y = y;
            }
        }
        best
    }

    /// Whether the names appear exactly in `scheme`'s canonical order.
    ///
    /// A palette that fails this check still dithers, but its indices will be
    /// interpreted as the wrong hardware colors by firmware expecting the
    /// scheme's layout.
    pub fn matches_scheme_order(&self, scheme: ColorScheme) -> bool {
        let canonical = scheme.color_names();
        canonical.len() == self.names.len()
            && canonical.iter().zip(&self.names).all(|(a, b)| *a == b.as_str())
    }

    /// Stretch measured colors so the darkest entry lands near
    /// `target_black` and the lightest near `target_white`.
    ///
    /// Measured black and white are the mean channel values of the lowest
    /// and highest luminance entries. Every channel of every entry then goes
    /// through the same affine map
    /// `target_black + (v - black) * (target_white - target_black) / (white - black)`,
    /// rounded and clamped to 0..=255. Names, order and accent are kept. A
    /// palette without a usable range (white not brighter than black) is
    /// returned unchanged.
    ///
    /// ```
    /// use epaper_dither::{MeasuredDisplay, Rgb};
    ///
    /// let measured = MeasuredDisplay::Mono4_26.palette();
    /// let stretched = measured.compress(0, 255);
    /// assert_eq!(stretched.color(0), Some(Rgb::BLACK));
    /// assert_eq!(stretched.color(1), Some(Rgb::WHITE));
    /// ```
    pub fn compress(&self, target_black: u8, target_white: u8) -> Palette {
        let mean = |c: Rgb| (c.r as f32 + c.g as f32 + c.b as f32) / 3.0;
        let measured_black = mean(self.colors[self.darkest_index()]);
        let measured_white = mean(self.colors[self.lightest_index()]);
        let range = measured_white - measured_black;
        if range <= f32::EPSILON {
            return self.clone();
        }

        let t_black = target_black as f32;
        let scale = (target_white as f32 - t_black) / range;
        let map = |v: u8| {
            (t_black + (v as f32 - measured_black) * scale)
                .round()
                .clamp(0.0, 255.0) as u8
        };

        let colors = self
            .colors
            .iter()
            .map(|c| Rgb::new(map(c.r), map(c.g), map(c.b)))
            .collect();
        Self::assemble(self.names.clone(), colors, self.accent)
    }
}

impl PartialEq for Palette {
    /// Derived representations follow from the colors, so only names,
    /// colors and accent are compared.
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names && self.colors == other.colors && self.accent == other.accent
    }
}

impl Eq for Palette {}
