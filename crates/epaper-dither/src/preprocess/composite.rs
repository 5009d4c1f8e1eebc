//! Alpha compositing onto blank paper.

use crate::api::DitherError;
use crate::color::Rgb;
use crate::image::ImageBuffer;

/// Blend one channel over white: `c * a + 255 * (1 - a)`, rounded.
#[inline]
fn over_white(channel: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((channel as u32 * a + 255 * (255 - a) + 127) / 255) as u8
}

/// Flatten an RGBA image to RGB against a white background.
///
/// White is what an unprinted e-paper pixel looks like, so transparent
/// regions come out as blank paper.
///
/// # Errors
///
/// [`DitherError::MalformedBuffer`] when the buffer length does not equal
/// `width * height * 4`. This is the only validation in the pipeline.
///
/// ```
/// use epaper_dither::{flatten_to_rgb, ImageBuffer, Rgb};
///
/// let image = ImageBuffer::new(2, 1, vec![255, 0, 0, 255, 0, 0, 0, 0]);
/// let rgb = flatten_to_rgb(&image).unwrap();
/// assert_eq!(rgb, vec![Rgb::new(255, 0, 0), Rgb::WHITE]);
/// ```
pub fn flatten_to_rgb(image: &ImageBuffer) -> Result<Vec<Rgb>, DitherError> {
    image.validate()?;
    Ok(image
        .data()
        .chunks_exact(4)
        .map(|p| {
            let alpha = p[3];
            Rgb::new(
                over_white(p[0], alpha),
                over_white(p[1], alpha),
                over_white(p[2], alpha),
            )
        })
        .collect())
}
