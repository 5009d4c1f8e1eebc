//! Assertion helpers for tests.

use std::path::Path;

use pretty_assertions::assert_eq;

/// Raw contents of an indexed PNG.
pub struct IndexedPng {
    pub width: u32,
    pub height: u32,
    pub bit_depth: png::BitDepth,
    pub palette: Vec<u8>,
    pub indices: Vec<u8>,
}

/// Read an indexed PNG without expansion and unpack its indices.
pub fn read_indexed_png(path: &Path) -> IndexedPng {
    let file = std::fs::File::open(path).expect("open output png");
    let mut decoder = png::Decoder::new(std::io::BufReader::new(file));
    decoder.set_transformations(png::Transformations::IDENTITY);
    let mut reader = decoder.read_info().expect("png info");

    let info = reader.info();
    assert_eq!(info.color_type, png::ColorType::Indexed, "output must be indexed");
    let palette = info.palette.as_deref().expect("PLTE chunk").to_vec();
    let (width, height, bit_depth) = (info.width, info.height, info.bit_depth);

    let mut raw = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut raw).expect("png frame");
    let raw = &raw[..frame.buffer_size()];

    let bits = bit_depth as u8 as usize;
    let row_bytes = (width as usize * bits).div_ceil(8);
    let mut indices = Vec::with_capacity((width * height) as usize);
    for row in raw.chunks(row_bytes) {
        for x in 0..width as usize {
            let bit = x * bits;
            let byte = row[bit / 8];
            let shift = 8 - bits - (bit % 8);
            indices.push((byte >> shift) & ((1u16 << bits) - 1) as u8);
        }
    }

    IndexedPng {
        width,
        height,
        bit_depth,
        palette,
        indices,
    }
}

/// Assert every index addresses a PLTE entry.
pub fn assert_indices_in_palette(png: &IndexedPng) {
    let colors = png.palette.len() / 3;
    assert_eq!(png.indices.len(), (png.width * png.height) as usize);
    assert!(
        png.indices.iter().all(|&i| (i as usize) < colors),
        "index outside {colors}-entry PLTE"
    );
}
