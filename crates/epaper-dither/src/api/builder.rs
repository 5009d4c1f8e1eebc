//! Dithering entry points.

use super::error::DitherError;
use crate::color::LinearRgb;
use crate::dither::{dither_indices, DitherMode, DitherOptions};
use crate::image::ImageBuffer;
use crate::output::PaletteImageBuffer;
use crate::palette::{ColorScheme, Palette};
use crate::preprocess::{compress_tone, flatten_to_rgb};

/// Where the target palette comes from: a built-in scheme or a caller's
/// own (typically measured) palette.
#[derive(Debug, Clone, Copy)]
pub enum PaletteSource<'a> {
    Scheme(ColorScheme),
    Custom(&'a Palette),
}

impl<'a> PaletteSource<'a> {
    /// The palette this source stands for.
    pub fn resolve(&self) -> &'a Palette {
        match *self {
            PaletteSource::Scheme(scheme) => scheme.palette(),
            PaletteSource::Custom(palette) => palette,
        }
    }
}

impl From<ColorScheme> for PaletteSource<'static> {
    fn from(scheme: ColorScheme) -> Self {
        PaletteSource::Scheme(scheme)
    }
}

impl<'a> From<&'a Palette> for PaletteSource<'a> {
    fn from(palette: &'a Palette) -> Self {
        PaletteSource::Custom(palette)
    }
}

/// Dither an RGBA image onto a scheme or palette.
///
/// Pipeline: composite over white, decode to linear light, optional tone
/// compression, then the mode's engine. The returned buffer carries a copy
/// of the palette that was used.
///
/// # Errors
///
/// [`DitherError::MalformedBuffer`] if the image's byte length does not
/// match its dimensions. Nothing else can fail once the palette exists.
///
/// # Example
///
/// ```
/// use epaper_dither::{dither, ColorScheme, DitherMode, DitherOptions, ImageBuffer};
///
/// let image = ImageBuffer::filled(8, 8, [200, 40, 30, 255]);
/// let result = dither(&image, ColorScheme::Bwr, DitherMode::Burkes, &DitherOptions::new()).unwrap();
///
/// assert_eq!(result.indices().len(), 64);
/// assert!(result.indices().iter().all(|&i| i < 3));
/// ```
pub fn dither<'a>(
    image: &ImageBuffer,
    target: impl Into<PaletteSource<'a>>,
    mode: DitherMode,
    options: &DitherOptions,
) -> Result<PaletteImageBuffer, DitherError> {
    let palette = target.into().resolve();
    let rgb = flatten_to_rgb(image)?;
    let (width, height) = (image.width(), image.height());

    let mut linear: Vec<LinearRgb> = rgb.into_iter().map(LinearRgb::from).collect();
    if options.tone_compression > 0.0 {
        compress_tone(&mut linear, palette, options.tone_compression);
    }

    tracing::debug!(
        mode = %mode,
        colors = palette.len(),
        accent = palette.accent_name(),
        width,
        height,
        serpentine = options.serpentine,
        "applying dithering"
    );

    let indices = dither_indices(&linear, width, height, palette, mode, options);
    PaletteImageBuffer::new(indices, width, height, palette.clone())
}

/// Reusable dithering configuration.
///
/// Defaults to [`DitherMode::Burkes`] with serpentine scanning and no tone
/// compression.
///
/// # Example
///
/// ```
/// use epaper_dither::{ColorScheme, DitherMode, Ditherer, ImageBuffer, MeasuredDisplay};
///
/// let measured = MeasuredDisplay::Spectra7_3.palette();
/// let ditherer = Ditherer::new(&measured)
///     .mode(DitherMode::FloydSteinberg)
///     .tone_compression(1.0);
///
/// let image = ImageBuffer::filled(4, 4, [90, 160, 220, 255]);
/// let result = ditherer.dither(&image).unwrap();
/// assert_eq!(result.palette().len(), ColorScheme::Bwgbry.color_count());
/// ```
#[derive(Debug, Clone)]
pub struct Ditherer {
    palette: Palette,
    mode: DitherMode,
    options: DitherOptions,
}

impl Ditherer {
    pub fn new<'a>(target: impl Into<PaletteSource<'a>>) -> Self {
        Self {
            palette: target.into().resolve().clone(),
            mode: DitherMode::default(),
            options: DitherOptions::default(),
        }
    }

    #[inline]
    pub fn mode(mut self, mode: DitherMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replace all options at once.
    #[inline]
    pub fn options(mut self, options: DitherOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub fn serpentine(mut self, enabled: bool) -> Self {
        self.options = self.options.serpentine(enabled);
        self
    }

    #[inline]
    pub fn tone_compression(mut self, strength: f32) -> Self {
        self.options = self.options.tone_compression(strength);
        self
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn current_mode(&self) -> DitherMode {
        self.mode
    }

    pub fn dither(&self, image: &ImageBuffer) -> Result<PaletteImageBuffer, DitherError> {
        dither(image, &self.palette, self.mode, &self.options)
    }
}
