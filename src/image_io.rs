//! PNG decode to RGBA and indexed PNG encode.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use epaper_dither::{ImageBuffer, PaletteImageBuffer};

use crate::error::AppError;

/// Decode any 8 or 16 bit PNG into an RGBA buffer.
///
/// Palette and low bit depth images are expanded, 16-bit samples are
/// stripped to 8 bits, and gray is widened to RGB.
pub fn decode_png<R: Read>(input: R) -> Result<ImageBuffer, AppError> {
    let mut decoder = png::Decoder::new(input);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let bytes = &buf[..info.buffer_size()];

    if info.bit_depth != png::BitDepth::Eight {
        return Err(AppError::UnsupportedPng(format!(
            "bit depth {:?} after expansion",
            info.bit_depth
        )));
    }

    let pixels = info.width as usize * info.height as usize;
    let mut rgba = Vec::with_capacity(pixels * 4);
    match info.color_type {
        png::ColorType::Rgba => rgba.extend_from_slice(bytes),
        png::ColorType::Rgb => {
            for p in bytes.chunks_exact(3) {
                rgba.extend_from_slice(&[p[0], p[1], p[2], 255]);
            }
        }
        png::ColorType::GrayscaleAlpha => {
            for p in bytes.chunks_exact(2) {
                rgba.extend_from_slice(&[p[0], p[0], p[0], p[1]]);
            }
        }
        png::ColorType::Grayscale => {
            for &v in bytes {
                rgba.extend_from_slice(&[v, v, v, 255]);
            }
        }
        png::ColorType::Indexed => {
            return Err(AppError::UnsupportedPng(
                "indexed image without a usable palette".to_string(),
            ));
        }
    }

    tracing::debug!(
        width = info.width,
        height = info.height,
        color_type = ?info.color_type,
        "Decoded PNG"
    );
    Ok(ImageBuffer::new(
        info.width as usize,
        info.height as usize,
        rgba,
    ))
}

pub fn read_png(path: &Path) -> Result<ImageBuffer, AppError> {
    let file = File::open(path).map_err(|e| AppError::io(path, e))?;
    decode_png(BufReader::new(file))
}

/// Smallest PNG bit depth able to hold every index of an `n`-color palette.
pub fn bit_depth_for(colors: usize) -> (png::BitDepth, u8) {
    match colors {
        0..=2 => (png::BitDepth::One, 1),
        3..=4 => (png::BitDepth::Two, 2),
        5..=16 => (png::BitDepth::Four, 4),
        _ => (png::BitDepth::Eight, 8),
    }
}

/// Encode a dithered image as an indexed PNG whose PLTE is the image's
/// palette, so index `i` in the file is palette entry `i`.
pub fn encode_indexed_png<W: Write>(image: &PaletteImageBuffer, output: W) -> Result<(), AppError> {
    let too_large = || {
        AppError::UnsupportedPng(format!(
            "{}x{} exceeds PNG dimensions",
            image.width(),
            image.height()
        ))
    };
    let width = u32::try_from(image.width()).map_err(|_| too_large())?;
    let height = u32::try_from(image.height()).map_err(|_| too_large())?;
    if width == 0 || height == 0 {
        return Err(AppError::UnsupportedPng("zero-sized image".to_string()));
    }

    let (depth, bits) = bit_depth_for(image.palette().len());
    let packed = if bits == 8 {
        image.indices().to_vec()
    } else {
        pack_nbits(image.indices(), image.width(), bits)
    };

    let mut encoder = png::Encoder::new(output, width, height);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(depth);
    encoder.set_palette(image.flat_palette());
    encoder.set_compression(png::Compression::Best);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&packed)?;
    writer.finish()?;
    Ok(())
}

pub fn write_indexed_png(path: &Path, image: &PaletteImageBuffer) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| AppError::io(path, e))?;
    let mut out = BufWriter::new(file);
    encode_indexed_png(image, &mut out)?;
    out.flush().map_err(|e| AppError::io(path, e))
}

/// Pack indices into N-bit PNG rows (1, 2 or 4 bits per pixel), MSB first.
/// Each row starts on a byte boundary.
fn pack_nbits(indices: &[u8], width: usize, bits: u8) -> Vec<u8> {
    let per_byte = 8 / bits as usize;
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(width.div_ceil(per_byte) * (indices.len() / width));

    for row in indices.chunks(width) {
        packed.extend(row.chunks(per_byte).map(|group| {
            group.iter().enumerate().fold(0u8, |byte, (slot, &idx)| {
                byte | ((idx & mask) << (8 - bits * (slot as u8 + 1)))
            })
        }));
    }

    packed
}
