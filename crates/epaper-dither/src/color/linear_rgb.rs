//! Linear RGB color type
//!
//! Linear RGB is the color space where light addition is physically accurate.
//! Error diffusion accumulates in this space and palette compositing math
//! happens here.

use super::lut::srgb8_to_linear;
use super::rgb::Rgb;

/// Rec. 709 / sRGB luminance coefficients (the Y row of the D65 matrix).
const LUMA_R: f32 = 0.212_672_9;
const LUMA_G: f32 = 0.715_152_2;
const LUMA_B: f32 = 0.072_175_0;

/// A color in linear RGB color space.
///
/// Values are nominally in 0.0..=1.0 but may leave that range during
/// error diffusion, where accumulated error can push a channel negative or
/// above full intensity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
}

impl LinearRgb {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from channel values on the 0.0..=255.0 scale used by the
    /// diffusion buffer.
    #[inline]
    pub fn from_scaled(channels: [f32; 3]) -> Self {
        Self::new(channels[0] / 255.0, channels[1] / 255.0, channels[2] / 255.0)
    }

    /// Channel values on the 0.0..=255.0 scale.
    #[inline]
    pub fn to_scaled(self) -> [f32; 3] {
        [self.r * 255.0, self.g * 255.0, self.b * 255.0]
    }

    /// Relative luminance (CIE Y).
    #[inline]
    pub fn luminance(self) -> f32 {
        LUMA_R * self.r + LUMA_G * self.g + LUMA_B * self.b
    }

    /// Multiply every channel by `factor`.
    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    /// Clamp every channel to 0.0..=1.0.
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }
}

impl From<Rgb> for LinearRgb {
    fn from(rgb: Rgb) -> Self {
        Self {
            r: srgb8_to_linear(rgb.r),
            g: srgb8_to_linear(rgb.g),
            b: srgb8_to_linear(rgb.b),
        }
    }
}
