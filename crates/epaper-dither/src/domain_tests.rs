//! Domain-critical regression tests for epaper-dither.
//!
//! Each test documents the class of bug it guards against rather than just
//! confirming a happy path.

use crate::api::{dither, Ditherer};
use crate::color::{LinearRgb, Rgb};
use crate::dither::{
    diffuse, dither_indices, ordered, ordered_pixel, DitherMode, DitherOptions, ATKINSON,
};
use crate::image::ImageBuffer;
use crate::matcher::closest_index;
use crate::palette::{ColorScheme, MeasuredDisplay, Palette, PaletteError};

fn gray_image(size: usize, v: u8) -> Vec<LinearRgb> {
    vec![LinearRgb::from(Rgb::new(v, v, v)); size * size]
}

fn color_wheel(width: usize, height: usize) -> ImageBuffer {
    let mut data = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / (width - 1)) as u8;
            let g = (y * 255 / (height - 1)) as u8;
            let b = ((x + y) * 255 / (width + height - 2)) as u8;
            data.extend_from_slice(&[r, g, 255 - b, 255]);
        }
    }
    ImageBuffer::new(width, height, data)
}

fn white_ratio(indices: &[u8]) -> f64 {
    indices.iter().filter(|&&i| i == 1).count() as f64 / indices.len() as f64
}

// ========================================================================
// Gamma correctness: error must diffuse in linear light
// ========================================================================

/// If this breaks, it means: error diffusion runs on sRGB codes instead of
/// linear light. sRGB 186 is about linear 0.5, so a black/white dither of it
/// should be close to half white; sRGB 128 is about linear 0.21 and would
/// come out near half white if diffused in sRGB.
#[test]
fn test_gamma_correctness_dither_ratios() {
    let palette = ColorScheme::Mono.palette();
    let size = 32;

    for mode in DitherMode::ALL {
        let Some(kernel) = mode.kernel() else {
            continue;
        };
        if *kernel == ATKINSON {
            continue;
        }

        let mid = diffuse(&gray_image(size, 186), size, size, palette, kernel, false);
        let ratio = white_ratio(&mid);
        assert!(
            (ratio - 0.5).abs() < 0.12,
            "REGRESSION: {mode} turned sRGB 186 into {ratio:.3} white, expected ~0.50"
        );

        let dark = diffuse(&gray_image(size, 128), size, size, palette, kernel, false);
        let ratio = white_ratio(&dark);
        assert!(
            (ratio - 0.214).abs() < 0.1,
            "REGRESSION: {mode} turned sRGB 128 into {ratio:.3} white, expected ~0.21. \
             Near 0.5 means diffusion is happening in sRGB."
        );
    }
}

/// If this breaks, it means: a kernel stopped conserving error. Burkes in
/// particular was once shipped dividing by 200 instead of 32, which throws
/// away most of the error and maps mid gray straight to white.
#[test]
fn test_burkes_propagates_full_error() {
    let palette = ColorScheme::Mono.palette();
    let indices = dither_indices(
        &gray_image(32, 186),
        32,
        32,
        palette,
        DitherMode::Burkes,
        &DitherOptions::new(),
    );
    let ratio = white_ratio(&indices);
    assert!(ratio < 0.65, "REGRESSION: Burkes produced {ratio:.3} white");
    assert!(ratio > 0.35, "REGRESSION: Burkes produced {ratio:.3} white");
}

// ========================================================================
// Output contract: one in-range index per pixel, deterministic
// ========================================================================

/// If this breaks, it means: some mode can emit an index the firmware has no
/// color for, or drops/duplicates pixels.
#[test]
fn test_indices_in_range_for_every_mode_and_palette() {
    let image = color_wheel(23, 17);
    let mut palettes: Vec<Palette> = ColorScheme::ALL.iter().map(|s| s.palette().clone()).collect();
    palettes.extend(MeasuredDisplay::ALL.iter().map(|d| d.palette()));

    for palette in &palettes {
        for mode in DitherMode::ALL {
            let result = dither(&image, palette, mode, &DitherOptions::new()).unwrap();
            assert_eq!(result.indices().len(), 23 * 17, "{mode}");
            assert!(
                result.indices().iter().all(|&i| (i as usize) < palette.len()),
                "{mode} emitted an index outside a {}-color palette",
                palette.len()
            );
        }
    }
}

/// If this breaks, it means: hidden state (a shared buffer, thread
/// scheduling, iteration order of a hash map) leaks into the output.
#[test]
fn test_dithering_is_deterministic() {
    let image = color_wheel(40, 30);
    let options = DitherOptions::new().tone_compression(0.6);
    let measured = MeasuredDisplay::Spectra7_3.palette();
    for mode in DitherMode::ALL {
        let first = dither(&image, &measured, mode, &options).unwrap();
        let second = dither(&image, &measured, mode, &options).unwrap();
        assert_eq!(first, second, "{mode} is not deterministic");
    }
}

#[test]
fn test_default_mode_is_burkes() {
    let image = color_wheel(16, 16);
    let via_default = Ditherer::new(ColorScheme::Bwgbry).dither(&image).unwrap();
    let via_burkes =
        dither(&image, ColorScheme::Bwgbry, DitherMode::Burkes, &DitherOptions::new()).unwrap();
    assert_eq!(via_default.indices(), via_burkes.indices());
}

// ========================================================================
// Firmware integer values
// ========================================================================

/// If this breaks, it means: a mode or scheme was renumbered and displays
/// will silently pick the wrong algorithm or palette.
#[test]
fn test_firmware_values_are_stable() {
    assert_eq!(DitherMode::from_value(6).unwrap(), DitherMode::Sierra);
    assert_eq!(DitherMode::from_value(1).unwrap(), DitherMode::Burkes);
    assert!(matches!(
        DitherMode::from_value(-1),
        Err(PaletteError::UnknownMode(_))
    ));
    assert!(DitherMode::from_value(9).is_err());

    assert_eq!(ColorScheme::from_value(3).unwrap(), ColorScheme::Bwry);
    assert_eq!(
        ColorScheme::from_value(6),
        Err(PaletteError::InvalidSchemeValue(6))
    );

    let bwry = ColorScheme::Bwry.palette();
    assert_eq!(bwry.name(2), Some("yellow"));
    assert_eq!(bwry.name(3), Some("red"));
}

// ========================================================================
// Compositing
// ========================================================================

/// If this breaks, it means: transparent regions are no longer treated as
/// blank paper and show up as black or noise on the panel.
#[test]
fn test_transparent_pixels_become_white() {
    let image = ImageBuffer::filled(9, 7, [0, 0, 0, 0]);
    for scheme in ColorScheme::ALL {
        let white = scheme.palette().index_of("white").unwrap() as u8;
        for mode in DitherMode::ALL {
            // Bayer offsets span more than one gray step
            if mode == DitherMode::Ordered && scheme == ColorScheme::Grayscale4 {
                continue;
            }
            let result = dither(&image, scheme, mode, &DitherOptions::new()).unwrap();
            assert!(
                result.indices().iter().all(|&i| i == white),
                "{scheme} / {mode}: transparent did not map to white"
            );
        }
    }
}

#[test]
fn test_opaque_palette_color_is_reproduced_exactly() {
    let image = ImageBuffer::filled(9, 7, [255, 0, 0, 255]);
    for mode in DitherMode::ALL {
        let result = dither(&image, ColorScheme::Bwr, mode, &DitherOptions::new()).unwrap();
        assert!(
            result.indices().iter().all(|&i| i == 2),
            "{mode}: pure red drifted off the red ink"
        );
    }
}

/// If this breaks, it means: a measured ink fed back in as input no longer
/// maps to itself, so calibrated patches print as noise.
#[test]
fn test_measured_inks_are_stable_under_diffusion() {
    let palette = MeasuredDisplay::Spectra7_3.palette();
    for (index, color) in palette.colors().iter().enumerate() {
        let image = ImageBuffer::filled(6, 6, [color.r, color.g, color.b, 255]);
        for mode in DitherMode::ALL.iter().filter(|m| m.is_error_diffusion()) {
            let result = dither(&image, &palette, *mode, &DitherOptions::new()).unwrap();
            assert!(
                result.indices().iter().all(|&i| i as usize == index),
                "{mode}: measured {:?} not stable",
                palette.name(index)
            );
        }
    }
}

/// If this breaks, it means: diffusion stopped bounding the accumulated
/// value, so a saturated color the panel cannot show builds up error in one
/// channel until the matcher sees nonsense. Pure green on black/white/red
/// once came out almost entirely red.
#[test]
fn test_out_of_gamut_color_never_runs_onto_accent() {
    let image = ImageBuffer::filled(48, 48, [0, 255, 0, 255]);
    for mode in DitherMode::ALL.iter().filter(|m| m.is_error_diffusion()) {
        let bwr = dither(&image, ColorScheme::Bwr, *mode, &DitherOptions::new()).unwrap();
        let red = ColorScheme::Bwr.palette().index_of("red").unwrap() as u8;
        assert!(
            bwr.indices().iter().all(|&i| i != red),
            "{mode}: pure green produced red ink on BWR"
        );

        let mono = dither(&image, ColorScheme::Mono, *mode, &DitherOptions::new()).unwrap();
        let ratio = white_ratio(mono.indices());
        assert!(
            ratio > 0.5,
            "{mode}: pure green came out {ratio:.3} white on MONO, expected mostly white"
        );
    }
}

// ========================================================================
// Scan order
// ========================================================================

/// If this breaks, it means: the serpentine flag is ignored, or reversed
/// rows no longer mirror the kernel.
#[test]
fn test_serpentine_differs_from_raster() {
    let image = color_wheel(48, 24);
    let serpentine = dither(&image, ColorScheme::Bwry, DitherMode::FloydSteinberg, &DitherOptions::new())
        .unwrap();
    let raster = dither(
        &image,
        ColorScheme::Bwry,
        DitherMode::FloydSteinberg,
        &DitherOptions::new().serpentine(false),
    )
    .unwrap();
    assert_ne!(serpentine.indices(), raster.indices());

    // First row is always scanned left to right
    assert_eq!(serpentine.indices()[..48], raster.indices()[..48]);
}

#[test]
fn test_serpentine_is_irrelevant_for_single_row() {
    let image = color_wheel(64, 2);
    let row = ImageBuffer::new(64, 1, image.data()[..64 * 4].to_vec());
    for mode in DitherMode::ALL {
        let serpentine = dither(&row, ColorScheme::Bwgbry, mode, &DitherOptions::new()).unwrap();
        let raster = dither(
            &row,
            ColorScheme::Bwgbry,
            mode,
            &DitherOptions::new().serpentine(false),
        )
        .unwrap();
        assert_eq!(serpentine, raster, "{mode}");
    }
}

/// If this breaks, it means: ordered dithering picked up state from
/// neighboring pixels, which breaks row-parallel processing.
#[test]
fn test_ordered_is_pixel_independent() {
    let palette = ColorScheme::Bwgbry.palette();
    let (width, height) = (21, 13);
    let image: Vec<LinearRgb> = (0..width * height)
        .map(|i| {
            let v = ((i * 37) % 256) as u8;
            LinearRgb::from(Rgb::new(v, 255 - v, (i % 7 * 36) as u8))
        })
        .collect();

    let full = ordered(&image, width, height, palette);
    for y in 0..height {
        for x in 0..width {
            assert_eq!(
                full[y * width + x],
                ordered_pixel(image[y * width + x], x, y, palette),
                "pixel ({x}, {y})"
            );
        }
    }
}

#[test]
fn test_no_dither_is_plain_nearest_color() {
    let image = color_wheel(15, 11);
    let result = dither(&image, ColorScheme::Bwgbry, DitherMode::None, &DitherOptions::new()).unwrap();
    for (i, pixel) in image.data().chunks_exact(4).enumerate() {
        let expected = closest_index(Rgb::new(pixel[0], pixel[1], pixel[2]), ColorScheme::Bwgbry.palette());
        assert_eq!(result.indices()[i] as usize, expected, "pixel {i}");
    }
}

// ========================================================================
// Measured palettes and tone compression
// ========================================================================

/// If this breaks, it means: measured palettes lost the scheme order, so a
/// dithered image would light up the wrong inks on the panel.
#[test]
fn test_measured_palettes_keep_firmware_order() {
    for display in MeasuredDisplay::ALL {
        let measured = display.palette();
        assert_eq!(
            measured.names().iter().map(String::as_str).collect::<Vec<_>>(),
            display.scheme().color_names(),
            "{display}"
        );
    }
}

/// If this breaks, it means: tone compression stopped pulling highlights
/// into the panel's range, and everything brighter than the measured white
/// collapses into a flat white area.
#[test]
fn test_tone_compression_recovers_highlight_detail() {
    let measured = MeasuredDisplay::Mono4_26.palette();
    let image = ImageBuffer::filled(24, 24, [235, 235, 235, 255]);

    let plain = Ditherer::new(&measured).dither(&image).unwrap();
    let compressed = Ditherer::new(&measured)
        .tone_compression(1.0)
        .dither(&image)
        .unwrap();

    assert!(plain.indices().iter().all(|&i| i == 1));
    assert!(
        compressed.indices().iter().any(|&i| i == 0),
        "compressed light gray should use some black"
    );
}
