//! Error diffusion kernel definitions.
//!
//! Each kernel lists the not-yet-visited neighbors that receive a share of a
//! pixel's quantization error. Weights are stored already divided by the
//! kernel's divisor.

/// An error diffusion kernel.
///
/// # Error Propagation
///
/// The total error propagated is the sum of the weights. Most kernels
/// propagate 100%, but Atkinson deliberately propagates only 75% (6/8):
/// the lost quarter keeps small palettes from smearing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    /// Human-readable name.
    pub name: &'static str,

    /// (dx, dy, weight) entries.
    ///
    /// - `dx`: horizontal offset (positive = scan direction, mirrored on reversed rows)
    /// - `dy`: rows below the current one (never negative)
    /// - `weight`: fraction of the error sent to that neighbor
    pub taps: &'static [(i32, usize, f32)],

    /// Denominator the published integer weights are expressed over.
    pub divisor: u16,
}

impl Kernel {
    /// How many rows below the current one the kernel reaches.
    pub fn max_dy(&self) -> usize {
        self.taps.iter().map(|&(_, dy, _)| dy).max().unwrap_or(0)
    }

    /// Sum of all weights (1.0 for a fully conserving kernel).
    pub fn total_weight(&self) -> f32 {
        self.taps.iter().map(|&(_, _, w)| w).sum()
    }
}

/// Floyd-Steinberg.
///
/// ```text
///        X   7
///    3   5   1      (/16)
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    name: "Floyd-Steinberg",
    taps: &[
        (1, 0, 7.0 / 16.0),
        (-1, 1, 3.0 / 16.0),
        (0, 1, 5.0 / 16.0),
        (1, 1, 1.0 / 16.0),
    ],
    divisor: 16,
};

/// Burkes: Stucki with the third row dropped.
///
/// ```text
///            X   8   4
///    2   4   8   4   2      (/32)
/// ```
pub const BURKES: Kernel = Kernel {
    name: "Burkes",
    taps: &[
        (1, 0, 8.0 / 32.0),
        (2, 0, 4.0 / 32.0),
        (-2, 1, 2.0 / 32.0),
        (-1, 1, 4.0 / 32.0),
        (0, 1, 8.0 / 32.0),
        (1, 1, 4.0 / 32.0),
        (2, 1, 2.0 / 32.0),
    ],
    divisor: 32,
};

/// Sierra (Sierra-3).
///
/// ```text
///            X   5   3
///    2   4   5   4   2
///        2   3   2          (/32)
/// ```
pub const SIERRA: Kernel = Kernel {
    name: "Sierra",
    taps: &[
        (1, 0, 5.0 / 32.0),
        (2, 0, 3.0 / 32.0),
        (-2, 1, 2.0 / 32.0),
        (-1, 1, 4.0 / 32.0),
        (0, 1, 5.0 / 32.0),
        (1, 1, 4.0 / 32.0),
        (2, 1, 2.0 / 32.0),
        (-1, 2, 2.0 / 32.0),
        (0, 2, 3.0 / 32.0),
        (1, 2, 2.0 / 32.0),
    ],
    divisor: 32,
};

/// Sierra Lite. Three taps, the cheapest kernel here.
///
/// ```text
///        X   2
///    1   1          (/4)
/// ```
pub const SIERRA_LITE: Kernel = Kernel {
    name: "Sierra Lite",
    taps: &[(1, 0, 2.0 / 4.0), (-1, 1, 1.0 / 4.0), (0, 1, 1.0 / 4.0)],
    divisor: 4,
};

/// Atkinson. Six taps of 1/8 each, so only 75% of the error moves on.
///
/// ```text
///        X   1   1
///    1   1   1
///        1              (/8)
/// ```
pub const ATKINSON: Kernel = Kernel {
    name: "Atkinson",
    taps: &[
        (1, 0, 1.0 / 8.0),
        (2, 0, 1.0 / 8.0),
        (-1, 1, 1.0 / 8.0),
        (0, 1, 1.0 / 8.0),
        (1, 1, 1.0 / 8.0),
        (0, 2, 1.0 / 8.0),
    ],
    divisor: 8,
};

/// Stucki.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///    1   2   4   2   1      (/42)
/// ```
pub const STUCKI: Kernel = Kernel {
    name: "Stucki",
    taps: &[
        (1, 0, 8.0 / 42.0),
        (2, 0, 4.0 / 42.0),
        (-2, 1, 2.0 / 42.0),
        (-1, 1, 4.0 / 42.0),
        (0, 1, 8.0 / 42.0),
        (1, 1, 4.0 / 42.0),
        (2, 1, 2.0 / 42.0),
        (-2, 2, 1.0 / 42.0),
        (-1, 2, 2.0 / 42.0),
        (0, 2, 4.0 / 42.0),
        (1, 2, 2.0 / 42.0),
        (2, 2, 1.0 / 42.0),
    ],
    divisor: 42,
};

/// Jarvis-Judice-Ninke. Widest spread, smoothest gradients.
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1      (/48)
/// ```
pub const JARVIS_JUDICE_NINKE: Kernel = Kernel {
    name: "Jarvis-Judice-Ninke",
    taps: &[
        (1, 0, 7.0 / 48.0),
        (2, 0, 5.0 / 48.0),
        (-2, 1, 3.0 / 48.0),
        (-1, 1, 5.0 / 48.0),
        (0, 1, 7.0 / 48.0),
        (1, 1, 5.0 / 48.0),
        (2, 1, 3.0 / 48.0),
        (-2, 2, 1.0 / 48.0),
        (-1, 2, 3.0 / 48.0),
        (0, 2, 5.0 / 48.0),
        (1, 2, 3.0 / 48.0),
        (2, 2, 1.0 / 48.0),
    ],
    divisor: 48,
};
