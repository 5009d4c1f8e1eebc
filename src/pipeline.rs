//! PNG in, dithered indexed PNG out.

use std::path::{Path, PathBuf};

use epaper_dither::{
    ColorScheme, DitherMode, Ditherer, ImageBuffer, MeasuredDisplay, Palette, PaletteImageBuffer,
};

use crate::config::PaletteFile;
use crate::error::AppError;
use crate::image_io;

/// Where the target palette comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteChoice {
    Scheme(ColorScheme),
    Display(MeasuredDisplay),
    File { path: PathBuf, name: String },
}

impl Default for PaletteChoice {
    fn default() -> Self {
        PaletteChoice::Scheme(ColorScheme::Mono)
    }
}

impl PaletteChoice {
    pub fn resolve(&self) -> Result<Palette, AppError> {
        match self {
            PaletteChoice::Scheme(scheme) => Ok(scheme.palette().clone()),
            PaletteChoice::Display(display) => Ok(display.palette()),
            PaletteChoice::File { path, name } => PaletteFile::load(path)?.palette(name),
        }
    }
}

/// Everything one `dither` invocation needs.
#[derive(Debug, Clone)]
pub struct DitherJob {
    pub palette: PaletteChoice,
    pub mode: DitherMode,
    pub serpentine: bool,
    pub tone_compression: f32,
    /// Stretch the palette's black..white span onto this range first.
    pub range: Option<(u8, u8)>,
}

impl Default for DitherJob {
    fn default() -> Self {
        Self {
            palette: PaletteChoice::default(),
            mode: DitherMode::default(),
            serpentine: true,
            tone_compression: 0.0,
            range: None,
        }
    }
}

impl DitherJob {
    /// Resolve the palette, applying `range` if set.
    pub fn palette(&self) -> Result<Palette, AppError> {
        let palette = self.palette.resolve()?;
        match self.range {
            Some((black, white)) if black >= white => Err(AppError::Config(format!(
                "range black ({black}) must be below white ({white})"
            ))),
            Some((black, white)) => Ok(palette.compress(black, white)),
            None => Ok(palette),
        }
    }

    /// Dither an in-memory image.
    pub fn apply(&self, image: &ImageBuffer) -> Result<PaletteImageBuffer, AppError> {
        let palette = self.palette()?;
        let ditherer = Ditherer::new(&palette)
            .mode(self.mode)
            .serpentine(self.serpentine)
            .tone_compression(self.tone_compression);
        Ok(ditherer.dither(image)?)
    }

    /// Read `input`, dither it and write an indexed PNG to `output`.
    pub fn run(&self, input: &Path, output: &Path) -> Result<PaletteImageBuffer, AppError> {
        let image = image_io::read_png(input)?;
        tracing::info!(
            input = %input.display(),
            width = image.width(),
            height = image.height(),
            mode = %self.mode,
            "Dithering"
        );

        let result = self.apply(&image)?;
        image_io::write_indexed_png(output, &result)?;

        tracing::info!(
            output = %output.display(),
            colors = result.palette().len(),
            "Wrote indexed PNG"
        );
        Ok(result)
    }
}
