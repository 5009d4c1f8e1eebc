//! Input preparation ahead of dithering.
//!
//! 1. **Composite** ([`flatten_to_rgb`]): RGBA over white paper, alpha dropped.
//! 2. **Tone compression** ([`compress_tone`], optional): squeeze image
//!    luminance into what the palette can actually show.

mod composite;
mod tone_map;

pub use composite::flatten_to_rgb;
pub use tone_map::compress_tone;
