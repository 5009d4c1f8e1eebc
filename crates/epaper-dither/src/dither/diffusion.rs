//! Generic error diffusion executor.

use super::kernel::Kernel;
use crate::color::LinearRgb;
use crate::matcher::closest_index_linear;
use crate::palette::Palette;

/// Per-call error accumulation buffer.
///
/// Holds the full image in linear light on a 0.0..=255.0 scale, one RGB
/// triple per pixel, indexed by (row, column, channel). It starts as a copy
/// of the input and every quantization step adds error into cells that have
/// not been visited yet.
#[derive(Debug)]
pub struct ErrorArena {
    cells: Vec<[f32; 3]>,
    width: usize,
    height: usize,
}

impl ErrorArena {
    /// Preload from a linear-light image.
    pub fn new(image: &[LinearRgb], width: usize, height: usize) -> Self {
        debug_assert_eq!(image.len(), width * height);
        Self {
            cells: image.iter().map(|c| c.to_scaled()).collect(),
            width,
            height,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [f32; 3] {
        self.cells[y * self.width + x]
    }

    /// Add `error * weight` at `(x, y)`. Coordinates outside the image are
    /// dropped.
    #[inline]
    pub fn add(&mut self, x: i64, y: usize, error: [f32; 3], weight: f32) {
        if x < 0 || x as usize >= self.width || y >= self.height {
            return;
        }
        let cell = &mut self.cells[y * self.width + x as usize];
        cell[0] += error[0] * weight;
        cell[1] += error[1] * weight;
        cell[2] += error[2] * weight;
    }
}

/// Run error diffusion with `kernel` over a linear-light image.
///
/// Rows are visited top to bottom. With `serpentine` set, odd rows run right
/// to left and every tap's `dx` is mirrored so error keeps flowing toward
/// unvisited pixels. Each pixel's accumulated value is truncated toward zero
/// and clamped to 0..=255 before matching; the difference between that
/// bounded value and the chosen palette color is spread over the kernel's
/// in-bounds taps. Without the clamp, a color outside the palette's range
/// keeps pushing error in one direction and the accumulator runs away.
pub fn diffuse(
    image: &[LinearRgb],
    width: usize,
    height: usize,
    palette: &Palette,
    kernel: &Kernel,
    serpentine: bool,
) -> Vec<u8> {
    let mut output = vec![0u8; width * height];
    let mut arena = ErrorArena::new(image, width, height);
    let targets: Vec<[f32; 3]> = palette
        .linear_colors()
        .iter()
        .map(|c| c.to_scaled())
        .collect();

    for y in 0..height {
        let reverse = serpentine && y % 2 == 1;

        let x_range: Box<dyn Iterator<Item = usize>> = if reverse {
            Box::new((0..width).rev())
        } else {
            Box::new(0..width)
        };

        for x in x_range {
            let [r, g, b] = arena.get(x, y);
            let old = [bound(r), bound(g), bound(b)];

            let index = closest_index_linear(LinearRgb::from_scaled(old), palette);
            output[y * width + x] = index as u8;

            let chosen = targets[index];
            let error = [old[0] - chosen[0], old[1] - chosen[1], old[2] - chosen[2]];

            for &(dx, dy, weight) in kernel.taps {
                let effective_dx = if reverse { -dx } else { dx };
                arena.add(x as i64 + effective_dx as i64, y + dy, error, weight);
            }
        }
    }

    output
}

#[inline]
fn bound(v: f32) -> f32 {
    v.trunc().clamp(0.0, 255.0)
}
