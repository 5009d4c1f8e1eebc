//! CIE L*a*b* color type
//!
//! Linear RGB is taken to CIE XYZ with the sRGB/D65 matrix and from there to
//! L*a*b* relative to the D65 reference white.

use super::linear_rgb::LinearRgb;

/// D65 reference white in XYZ (Y normalized to 1).
const WHITE_X: f32 = 0.950_47;
const WHITE_Y: f32 = 1.0;
const WHITE_Z: f32 = 1.088_83;

/// CIE constants: (6/29)^3 and (29/3)^3.
const EPSILON: f32 = 216.0 / 24389.0;
const KAPPA: f32 = 24389.0 / 27.0;

/// sRGB (D65) linear RGB -> XYZ.
const RGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.412_456_4, 0.357_576_1, 0.180_437_5],
    [0.212_672_9, 0.715_152_2, 0.072_175_0],
    [0.019_333_9, 0.119_192_0, 0.950_304_1],
];

/// XYZ -> sRGB (D65) linear RGB.
const XYZ_TO_RGB: [[f32; 3]; 3] = [
    [3.240_454_2, -1.537_138_5, -0.498_531_4],
    [-0.969_266_0, 1.876_010_8, 0.041_556_0],
    [0.055_643_4, -0.204_025_9, 1.057_225_2],
];

/// A color in CIE L*a*b* (D65).
///
/// `l` is in 0.0..=100.0 for in-gamut colors; `a` and `b` are unbounded but
/// stay within roughly ±130 for sRGB input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

#[inline]
fn f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn f_inv(ft: f32) -> f32 {
    let cube = ft * ft * ft;
    if cube > EPSILON {
        cube
    } else {
        (116.0 * ft - 16.0) / KAPPA
    }
}

#[inline]
fn mul(m: &[[f32; 3]; 3], v: [f32; 3]) -> [f32; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

impl Lab {
    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Convert back to linear RGB. Out-of-gamut results are not clamped.
    pub fn to_linear(self) -> LinearRgb {
        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;

        let xyz = [
            f_inv(fx) * WHITE_X,
            // L itself decides the branch for Y so the dark end stays exact
            if self.l > KAPPA * EPSILON {
                fy * fy * fy
            } else {
                self.l / KAPPA
            } * WHITE_Y,
            f_inv(fz) * WHITE_Z,
        ];
        let [r, g, b] = mul(&XYZ_TO_RGB, xyz);
        LinearRgb::new(r, g, b)
    }
}

impl From<LinearRgb> for Lab {
    /// Defined for any input, including the negative and above-one values
    /// that occur while diffusing error.
    fn from(rgb: LinearRgb) -> Self {
        let [x, y, z] = mul(&RGB_TO_XYZ, [rgb.r, rgb.g, rgb.b]);
        let fx = f(x / WHITE_X);
        let fy = f(y / WHITE_Y);
        let fz = f(z / WHITE_Z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use ::palette::{IntoColor, LinSrgb};

    fn lab_of(r: u8, g: u8, b: u8) -> Lab {
        Rgb::new(r, g, b).to_lab()
    }

    #[test]
    fn test_reference_points() {
        let black = lab_of(0, 0, 0);
        assert!(black.l.abs() < 1e-4 && black.a.abs() < 1e-4 && black.b.abs() < 1e-4);

        let white = lab_of(255, 255, 255);
        assert!((white.l - 100.0).abs() < 0.01, "white L = {}", white.l);
        assert!(white.a.abs() < 0.01 && white.b.abs() < 0.01, "{white:?}");

        // Well-known D65 values for pure red
        let red = lab_of(255, 0, 0);
        assert!((red.l - 53.24).abs() < 0.05, "{red:?}");
        assert!((red.a - 80.09).abs() < 0.1, "{red:?}");
        assert!((red.b - 67.20).abs() < 0.1, "{red:?}");
    }

    #[test]
    fn test_grays_are_neutral() {
        for v in (0..=255u8).step_by(5) {
            let lab = lab_of(v, v, v);
            assert!(
                lab.a.abs() < 0.01 && lab.b.abs() < 0.01,
                "gray {v} not neutral: {lab:?}"
            );
        }
    }

    /// Cross-check against an independent L*a*b* implementation.
    #[test]
    fn test_matches_palette_crate() {
        for &(r, g, b) in &[
            (255u8, 0u8, 0u8),
            (0, 255, 0),
            (0, 0, 255),
            (255, 255, 0),
            (26, 14, 35),
            (180, 197, 202),
            (119, 12, 2),
            (128, 128, 128),
            (3, 2, 1),
        ] {
            let ours = lab_of(r, g, b);
            let lin = Rgb::new(r, g, b).to_linear();
            let reference: ::palette::Lab = LinSrgb::new(lin.r, lin.g, lin.b).into_color();
            assert!(
                (ours.l - reference.l).abs() < 0.1
                    && (ours.a - reference.a).abs() < 0.2
                    && (ours.b - reference.b).abs() < 0.2,
                "({r},{g},{b}): ours {ours:?}, palette crate {reference:?}"
            );
        }
    }

    #[test]
    fn test_lab_round_trip_all_channels() {
        // Every value on each axis, plus the gray ramp
        for v in 0..=255u8 {
            for rgb in [
                Rgb::new(v, 0, 0),
                Rgb::new(0, v, 0),
                Rgb::new(0, 0, v),
                Rgb::new(v, v, v),
                Rgb::new(v, 255 - v, v / 2),
            ] {
                let back = Rgb::from(rgb.to_lab().to_linear());
                for (orig, got) in rgb.to_bytes().iter().zip(back.to_bytes()) {
                    assert!(
                        (*orig as i32 - got as i32).abs() <= 1,
                        "{rgb:?} came back as {back:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_input_is_finite() {
        let lab = Lab::from(LinearRgb::new(-0.3, 1.4, 0.5));
        assert!(lab.l.is_finite() && lab.a.is_finite() && lab.b.is_finite());
    }
}
