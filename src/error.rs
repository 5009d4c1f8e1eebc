use std::path::PathBuf;

use epaper_dither::DitherError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Palette file error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("PNG decode error: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("Unsupported PNG: {0}")]
    UnsupportedPng(String),

    #[error("Unknown palette '{name}' (available: {available})")]
    UnknownPalette { name: String, available: String },

    #[error("Dither error: {0}")]
    Dither(#[from] DitherError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<epaper_dither::PaletteError> for AppError {
    fn from(e: epaper_dither::PaletteError) -> Self {
        AppError::Dither(DitherError::Palette(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use epaper_dither::PaletteError;

    #[test]
    fn test_app_error_io() {
        let error = AppError::io(
            "in.png",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(error.to_string(), "IO error on in.png: missing");
    }

    #[test]
    fn test_app_error_unsupported_png() {
        let error = AppError::UnsupportedPng("zero-sized image".to_string());
        assert_eq!(error.to_string(), "Unsupported PNG: zero-sized image");
    }

    #[test]
    fn test_app_error_unknown_palette() {
        let error = AppError::UnknownPalette {
            name: "kitchen".to_string(),
            available: "office, hall".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unknown palette 'kitchen' (available: office, hall)"
        );
    }

    #[test]
    fn test_app_error_config() {
        let error = AppError::Config("no palette source".to_string());
        assert_eq!(error.to_string(), "Configuration error: no palette source");
    }

    #[test]
    fn test_app_error_from_palette_error() {
        let error: AppError = PaletteError::EmptyPalette.into();
        assert!(matches!(
            error,
            AppError::Dither(DitherError::Palette(PaletteError::EmptyPalette))
        ));
        assert!(error.to_string().starts_with("Dither error: "));
    }

    #[test]
    fn test_app_error_yaml() {
        let yaml_err = serde_yaml::from_str::<u32>("not: [a number").unwrap_err();
        let error = AppError::from(yaml_err);
        assert!(error.to_string().starts_with("Palette file error: "));
    }
}
