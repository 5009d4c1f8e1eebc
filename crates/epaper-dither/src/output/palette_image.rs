//! Dithered output raster.

use crate::api::DitherError;
use crate::color::Rgb;
use crate::palette::Palette;

/// The result of a dithering call: one palette index per pixel plus the
/// palette those indices refer to.
///
/// Carrying the palette means the image can be turned back into colors
/// without knowing which scheme or measured palette produced it.
///
/// # Example
///
/// ```
/// use epaper_dither::{ColorScheme, PaletteImageBuffer, Rgb};
///
/// let image = PaletteImageBuffer::new(vec![0, 1, 1, 0], 2, 2, ColorScheme::Mono.palette().clone())
///     .unwrap();
///
/// assert_eq!(image.indices(), &[0, 1, 1, 0]);
/// assert_eq!(image.color_at(1, 0), Some(Rgb::WHITE));
/// assert_eq!(image.flat_palette(), vec![0, 0, 0, 255, 255, 255]);
/// assert_eq!(image.to_rgb().len(), 2 * 2 * 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteImageBuffer {
    /// Palette indices, one per pixel, row-major order.
    indices: Vec<u8>,
    width: usize,
    height: usize,
    palette: Palette,
}

impl PaletteImageBuffer {
    /// # Errors
    ///
    /// [`DitherError::MalformedBuffer`] if `indices.len() != width * height`,
    /// [`DitherError::IndexOutOfPalette`] if any index has no palette entry.
    pub fn new(
        indices: Vec<u8>,
        width: usize,
        height: usize,
        palette: Palette,
    ) -> Result<Self, DitherError> {
        if indices.len() != width * height {
            return Err(DitherError::MalformedBuffer {
                width,
                height,
                expected: width * height,
                actual: indices.len(),
            });
        }
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= palette.len()) {
            return Err(DitherError::IndexOutOfPalette {
                index,
                colors: palette.len(),
            });
        }
        Ok(Self {
            indices,
            width,
            height,
            palette,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    #[inline]
    pub fn into_indices(self) -> Vec<u8> {
        self.indices
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Palette as flat `[r, g, b, ...]` bytes, in index order.
    pub fn flat_palette(&self) -> Vec<u8> {
        self.palette.to_flat_rgb()
    }

    /// Index at `(x, y)`, or `None` outside the image.
    pub fn index_at(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.indices.get(y * self.width + x).copied()
    }

    /// Color at `(x, y)`, or `None` outside the image.
    pub fn color_at(&self, x: usize, y: usize) -> Option<Rgb> {
        self.index_at(x, y)
            .and_then(|i| self.palette.color(i as usize))
    }

    /// Rebuild a displayable packed RGB raster (3 bytes per pixel).
    pub fn to_rgb(&self) -> Vec<u8> {
        let colors = self.palette.colors();
        let mut out = Vec::with_capacity(self.indices.len() * 3);
        for &i in &self.indices {
            out.extend_from_slice(&colors[i as usize].to_bytes());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ColorScheme;

    fn sample() -> PaletteImageBuffer {
        PaletteImageBuffer::new(
            vec![0, 1, 2, 2, 1, 0],
            3,
            2,
            ColorScheme::Bwr.palette().clone(),
        )
        .unwrap()
    }

    #[test]
    fn test_accessors() {
        let img = sample();
        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 2);
        assert_eq!(img.index_at(2, 0), Some(2));
        assert_eq!(img.index_at(0, 1), Some(2));
        assert_eq!(img.index_at(3, 0), None);
        assert_eq!(img.index_at(0, 2), None);
        assert_eq!(img.color_at(2, 0), Some(Rgb::new(255, 0, 0)));
        assert_eq!(img.palette().len(), 3);
    }

    #[test]
    fn test_to_rgb() {
        let rgb = sample().to_rgb();
        assert_eq!(
            rgb,
            vec![
                0, 0, 0, 255, 255, 255, 255, 0, 0, //
                255, 0, 0, 255, 255, 255, 0, 0, 0,
            ]
        );
    }

    #[test]
    fn test_new_rejects_bad_indices() {
        let palette = ColorScheme::Bwr.palette().clone();
        let err = PaletteImageBuffer::new(vec![0, 1, 3, 1], 2, 2, palette.clone()).unwrap_err();
        assert_eq!(err, DitherError::IndexOutOfPalette { index: 3, colors: 3 });

        let err = PaletteImageBuffer::new(vec![0, 1, 2], 2, 2, palette).unwrap_err();
        assert!(matches!(
            err,
            DitherError::MalformedBuffer {
                expected: 4,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_flat_palette_and_indices() {
        let img = sample();
        assert_eq!(img.flat_palette(), vec![0, 0, 0, 255, 255, 255, 255, 0, 0]);
        assert_eq!(img.into_indices(), vec![0, 1, 2, 2, 1, 0]);
    }
}
