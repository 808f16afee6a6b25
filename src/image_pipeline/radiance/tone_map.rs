use crate::image_pipeline::radiance::types::{DisplayImage, Rgb, RadianceImage};

/// Display gamma. Encoding raises linear values to `1 / GAMMA`.
pub const GAMMA: f64 = 2.2;

const MAX_CHANNEL: f64 = 255.0;

/// Maps one linear channel value to an 8-bit gamma-encoded value.
///
/// The value is clamped to [0, 1], raised to `1 / 2.2` in double precision,
/// scaled by 255 and rounded half-up by adding 0.5 before truncation.
/// NaN clamps to 1.0 because the upper bound is applied first.
pub fn tone_map_channel(value: f32) -> u8 {
    let clamped = value.min(1.0).max(0.0);
    let encoded = f64::from(clamped).powf(1.0 / GAMMA);
    // Clamp keeps this within [0.5, 255.5], so the cast cannot wrap
    (encoded * MAX_CHANNEL + 0.5) as u8
}

pub fn tone_map_pixel(pixel: Rgb) -> [u8; 3] {
    [
        tone_map_channel(pixel.r),
        tone_map_channel(pixel.g),
        tone_map_channel(pixel.b),
    ]
}

pub fn tone_map_image(image: &RadianceImage<'_>) -> DisplayImage {
    DisplayImage {
        width: image.width(),
        height: image.height(),
        max_value: u8::MAX,
        pixels: image.pixels().iter().copied().map(tone_map_pixel).collect(),
    }
}
