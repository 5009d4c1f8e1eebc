//! Dithering mode selection.

use std::fmt;
use std::str::FromStr;

use super::kernel::{
    Kernel, ATKINSON, BURKES, FLOYD_STEINBERG, JARVIS_JUDICE_NINKE, SIERRA, SIERRA_LITE, STUCKI,
};
use crate::palette::PaletteError;

/// How pixels are mapped onto the palette.
///
/// Integer values follow the display firmware convention and are stable.
///
/// ```
/// use epaper_dither::DitherMode;
///
/// assert_eq!(DitherMode::default(), DitherMode::Burkes);
/// assert_eq!(DitherMode::from_value(3).unwrap(), DitherMode::FloydSteinberg);
/// assert_eq!("sierra-lite".parse::<DitherMode>().unwrap(), DitherMode::SierraLite);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum DitherMode {
    /// Nearest palette color per pixel, no dithering.
    None = 0,
    /// Burkes error diffusion.
    #[default]
    Burkes = 1,
    /// 4x4 Bayer ordered dithering.
    Ordered = 2,
    /// Floyd-Steinberg error diffusion.
    FloydSteinberg = 3,
    /// Atkinson error diffusion (75% propagation).
    Atkinson = 4,
    /// Stucki error diffusion.
    Stucki = 5,
    /// Sierra (three-row) error diffusion.
    Sierra = 6,
    /// Sierra Lite error diffusion.
    SierraLite = 7,
    /// Jarvis-Judice-Ninke error diffusion.
    JarvisJudiceNinke = 8,
}

impl DitherMode {
    /// Every mode, in firmware value order.
    pub const ALL: [DitherMode; 9] = [
        DitherMode::None,
        DitherMode::Burkes,
        DitherMode::Ordered,
        DitherMode::FloydSteinberg,
        DitherMode::Atkinson,
        DitherMode::Stucki,
        DitherMode::Sierra,
        DitherMode::SierraLite,
        DitherMode::JarvisJudiceNinke,
    ];

    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Look up a mode by firmware value.
    ///
    /// # Errors
    ///
    /// [`PaletteError::UnknownMode`] for anything outside 0..=8.
    pub fn from_value(value: i64) -> Result<Self, PaletteError> {
        usize::try_from(value)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| PaletteError::UnknownMode(value.to_string()))
    }

    pub const fn name(self) -> &'static str {
        match self {
            DitherMode::None => "NONE",
            DitherMode::Burkes => "BURKES",
            DitherMode::Ordered => "ORDERED",
            DitherMode::FloydSteinberg => "FLOYD_STEINBERG",
            DitherMode::Atkinson => "ATKINSON",
            DitherMode::Stucki => "STUCKI",
            DitherMode::Sierra => "SIERRA",
            DitherMode::SierraLite => "SIERRA_LITE",
            DitherMode::JarvisJudiceNinke => "JARVIS_JUDICE_NINKE",
        }
    }

    /// The diffusion kernel, or `None` for the non-diffusing modes.
    pub const fn kernel(self) -> Option<&'static Kernel> {
        match self {
            DitherMode::None | DitherMode::Ordered => None,
            DitherMode::Burkes => Some(&BURKES),
            DitherMode::FloydSteinberg => Some(&FLOYD_STEINBERG),
            DitherMode::Atkinson => Some(&ATKINSON),
            DitherMode::Stucki => Some(&STUCKI),
            DitherMode::Sierra => Some(&SIERRA),
            DitherMode::SierraLite => Some(&SIERRA_LITE),
            DitherMode::JarvisJudiceNinke => Some(&JARVIS_JUDICE_NINKE),
        }
    }

    /// Whether this mode carries error between pixels.
    #[inline]
    pub const fn is_error_diffusion(self) -> bool {
        self.kernel().is_some()
    }
}

impl TryFrom<i64> for DitherMode {
    type Error = PaletteError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl fmt::Display for DitherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DitherMode {
    type Err = PaletteError;

    /// Accepts the mode name in any case with `-` or `_`, a few common short
    /// forms (`fs`, `jjn`, `bayer`), or the firmware value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(value) = s.parse::<i64>() {
            return Self::from_value(value);
        }
        let wanted = s.to_ascii_uppercase().replace('-', "_");
        let alias = match wanted.as_str() {
            "FS" => Some(DitherMode::FloydSteinberg),
            "JJN" | "JARVIS" => Some(DitherMode::JarvisJudiceNinke),
            "BAYER" => Some(DitherMode::Ordered),
            _ => None,
        };
        alias
            .or_else(|| Self::ALL.iter().copied().find(|m| m.name() == wanted))
            .ok_or_else(|| PaletteError::UnknownMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_firmware_values() {
        let values: Vec<u8> = DitherMode::ALL.iter().map(|m| m.value()).collect();
        assert_eq!(values, (0..=8).collect::<Vec<u8>>());
        assert_eq!(DitherMode::None.value(), 0);
        assert_eq!(DitherMode::Burkes.value(), 1);
        assert_eq!(DitherMode::Ordered.value(), 2);
        assert_eq!(DitherMode::JarvisJudiceNinke.value(), 8);
    }

    #[test]
    fn test_from_value() {
        for mode in DitherMode::ALL {
            assert_eq!(DitherMode::from_value(mode.value() as i64), Ok(mode));
        }
        assert!(DitherMode::from_value(9).is_err());
        assert!(DitherMode::from_value(-1).is_err());
    }

    #[test]
    fn test_kernels_assigned() {
        assert!(DitherMode::None.kernel().is_none());
        assert!(DitherMode::Ordered.kernel().is_none());
        assert_eq!(DitherMode::Burkes.kernel().map(|k| k.name), Some("Burkes"));
        assert_eq!(
            DitherMode::SierraLite.kernel().map(|k| k.name),
            Some("Sierra Lite")
        );
        let diffusing = DitherMode::ALL
            .iter()
            .filter(|m| m.is_error_diffusion())
            .count();
        assert_eq!(diffusing, 7);
    }

    #[test]
    fn test_parse() {
        assert_eq!("burkes".parse::<DitherMode>(), Ok(DitherMode::Burkes));
        assert_eq!(
            "Floyd-Steinberg".parse::<DitherMode>(),
            Ok(DitherMode::FloydSteinberg)
        );
        assert_eq!("fs".parse::<DitherMode>(), Ok(DitherMode::FloydSteinberg));
        assert_eq!("jjn".parse::<DitherMode>(), Ok(DitherMode::JarvisJudiceNinke));
        assert_eq!("bayer".parse::<DitherMode>(), Ok(DitherMode::Ordered));
        assert_eq!("0".parse::<DitherMode>(), Ok(DitherMode::None));
        assert_eq!(
            "halftone".parse::<DitherMode>(),
            Err(PaletteError::UnknownMode("halftone".into()))
        );
        for mode in DitherMode::ALL {
            assert_eq!(mode.to_string().parse::<DitherMode>(), Ok(mode));
        }
    }
}
