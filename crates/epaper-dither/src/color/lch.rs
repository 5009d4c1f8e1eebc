//! Cylindrical form of L*a*b*

use super::lab::Lab;

/// A color in CIE LCh(ab): lightness, chroma and hue angle in degrees.
///
/// `h` is always in 0.0..360.0. For neutral colors (`c == 0`) the hue is 0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lch {
    pub l: f32,
    pub c: f32,
    pub h: f32,
}

impl Lch {
    #[inline]
    pub fn new(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }

    #[inline]
    pub fn to_lab(self) -> Lab {
        let (sin, cos) = self.h.to_radians().sin_cos();
        Lab::new(self.l, self.c * cos, self.c * sin)
    }
}

impl From<Lab> for Lch {
    fn from(lab: Lab) -> Self {
        let c = lab.a.hypot(lab.b);
        let mut h = lab.b.atan2(lab.a).to_degrees();
        if h < 0.0 {
            h += 360.0;
        }
        // -0.0001 + 360 rounds up to exactly 360.0 in f32
        if h >= 360.0 {
            h -= 360.0;
        }
        Self { l: lab.l, c, h }
    }
}
