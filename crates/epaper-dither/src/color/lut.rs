//! sRGB transfer function
//!
//! 8-bit input goes through an exact table generated by build.rs; the
//! continuous functions below use the IEC 61966-2-1 formulas directly.

include!(concat!(env!("OUT_DIR"), "/srgb_lut.rs"));

/// Decode an 8-bit sRGB channel to linear light (0.0..=1.0).
#[inline]
pub(crate) fn srgb8_to_linear(value: u8) -> f32 {
    SRGB8_TO_LINEAR[value as usize]
}

/// Decode a normalized sRGB channel (0.0..=1.0) to linear light.
///
/// Uses the piecewise IEC 61966-2-1 curve: a linear segment below 0.04045
/// and the 2.4 power law with 0.055 offset above it.
#[inline]
pub fn srgb_to_linear(srgb: f32) -> f32 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode linear light (0.0..=1.0) to a normalized sRGB channel.
///
/// Input is clamped to 0.0..=1.0 first.
#[inline]
pub fn linear_to_srgb(linear: f32) -> f32 {
    let linear = linear.clamp(0.0, 1.0);
    if linear <= 0.003_130_8 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}
