//! Test fixtures: generated PNG inputs and palette files.

use std::path::{Path, PathBuf};

/// A palette file with one BWRY panel in firmware order and one mono panel
/// that needs range stretching.
pub const PALETTE_YAML: &str = r##"
palettes:
  kitchen:
    scheme: bwry
    accent: red
    colors:
      - { name: black, color: "#050505" }
      - { name: white, color: "#C8C8C8" }
      - { name: yellow, color: "#C8B400" }
      - { name: red, color: "#780F05" }
  hall:
    scheme: mono
    accent: black
    colors:
      - { name: black, color: "#101010" }
      - { name: white, color: "#C0C0C0" }
    range: { black: 0, white: 255 }
"##;

pub fn write_palette_file(dir: &Path) -> PathBuf {
    let path = dir.join("palettes.yaml");
    std::fs::write(&path, PALETTE_YAML).expect("write palette file");
    path
}

/// RGBA gradient: red rises left to right, green top to bottom, with a fully
/// transparent left column.
pub fn gradient_rgba(width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / (width - 1)) as u8;
            let g = (y * 255 / (height - 1)) as u8;
            let a = if x == 0 { 0 } else { 255 };
            data.extend_from_slice(&[r, g, 128, a]);
        }
    }
    data
}

pub fn write_png(
    path: &Path,
    width: u32,
    height: u32,
    color: png::ColorType,
    data: &[u8],
) -> PathBuf {
    let file = std::fs::File::create(path).expect("create png");
    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
    encoder.set_color(color);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().expect("png header");
    writer.write_image_data(data).expect("png data");
    writer.finish().expect("png finish");
    path.to_path_buf()
}

pub fn write_gradient_png(dir: &Path, width: u32, height: u32) -> PathBuf {
    write_png(
        &dir.join("gradient.png"),
        width,
        height,
        png::ColorType::Rgba,
        &gradient_rgba(width, height),
    )
}
