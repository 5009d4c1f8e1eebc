//! Input raster type.

use crate::api::DitherError;

/// A row-major RGBA raster, 4 bytes per pixel.
///
/// Construction does not validate the buffer length; that happens when the
/// image is flattened for dithering, which reports
/// [`DitherError::MalformedBuffer`] on mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl ImageBuffer {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Build from packed RGB bytes with every pixel fully opaque.
    ///
    /// # Errors
    ///
    /// [`DitherError::MalformedBuffer`] if `rgb.len() != width * height * 3`.
    pub fn from_rgb(width: usize, height: usize, rgb: &[u8]) -> Result<Self, DitherError> {
        let expected = width.saturating_mul(height).saturating_mul(3);
        if rgb.len() != expected {
            return Err(DitherError::MalformedBuffer {
                width,
                height,
                expected,
                actual: rgb.len(),
            });
        }
        let data = rgb
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect();
        Ok(Self::new(width, height, data))
    }

    /// A `width` x `height` image where every pixel is `rgba`.
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Self {
        Self::new(width, height, rgba.repeat(width * height))
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
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of bytes a well-formed buffer of these dimensions holds.
    #[inline]
    pub fn expected_len(&self) -> usize {
        self.width.saturating_mul(self.height).saturating_mul(4)
    }

    /// Check the buffer length against the dimensions.
    pub fn validate(&self) -> Result<(), DitherError> {
        let expected = self.expected_len();
        if self.data.len() != expected {
            return Err(DitherError::MalformedBuffer {
                width: self.width,
                height: self.height,
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }
}
