//! Dithering options.

/// Per-call options shared by every dithering mode.
///
/// # Defaults
///
/// - Serpentine scanning: enabled
/// - Tone compression: off (`0.0`)
///
/// # Example
///
/// ```
/// use epaper_dither::DitherOptions;
///
/// let options = DitherOptions::new()
///     .serpentine(false)
///     .tone_compression(1.0);
/// assert!(!options.serpentine);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DitherOptions {
    /// Alternate scan direction every row.
    ///
    /// Odd rows run right-to-left with the kernel mirrored. Only error
    /// diffusion modes look at this; `None` and `Ordered` ignore it.
    ///
    /// Default: `true`
    pub serpentine: bool,

    /// Strength of luminance compression into the palette's range.
    ///
    /// `0.0` leaves the image alone, `1.0` maps image black and white
    /// exactly onto the palette's darkest and lightest entries. Useful with
    /// measured palettes whose white is far from 255.
    ///
    /// Default: `0.0`
    pub tone_compression: f32,
}

impl Default for DitherOptions {
    fn default() -> Self {
        Self {
            serpentine: true,
            tone_compression: 0.0,
        }
    }
}

impl DitherOptions {
    /// Same as `DitherOptions::default()`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn serpentine(mut self, enabled: bool) -> Self {
        self.serpentine = enabled;
        self
    }

    /// Set tone compression strength; clamped to 0.0..=1.0.
    #[inline]
    pub fn tone_compression(mut self, strength: f32) -> Self {
        self.tone_compression = if strength.is_nan() {
            0.0
        } else {
            strength.clamp(0.0, 1.0)
        };
        self
    }
}
