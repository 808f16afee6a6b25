//! Linear radiance input module
//!
//! Borrowed views over renderer output and the tone mapping that turns
//! unbounded linear light into 8-bit display values.

pub mod types;
mod tone_map;

pub use types::{Rgb, RadianceImage, DisplayImage};
pub use tone_map::{tone_map_channel, tone_map_pixel, tone_map_image, GAMMA};
