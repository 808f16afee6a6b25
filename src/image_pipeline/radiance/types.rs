//! Radiance and display image types

use crate::image_pipeline::common::error::{EncodeError, Result};

/// One linear RGB radiance sample. Channels are unbounded; values outside
/// [0, 1] are expected after sample accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl From<[f32; 3]> for Rgb {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<(f32, f32, f32)> for Rgb {
    fn from((r, g, b): (f32, f32, f32)) -> Self {
        Self { r, g, b }
    }
}

/// Read-only view over a caller-owned, row-major pixel buffer.
#[derive(Debug, Clone, Copy)]
pub struct RadianceImage<'a> {
    width: usize,
    height: usize,
    pixels: &'a [Rgb],
}

impl<'a> RadianceImage<'a> {
    /// Wraps `pixels` after checking that the grid is non-empty and that the
    /// buffer holds exactly `width * height` entries.
    pub fn new(width: usize, height: usize, pixels: &'a [Rgb]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(EncodeError::InvalidDimensions(width, height));
        }

        let expected = width
            .checked_mul(height)
            .ok_or(EncodeError::InvalidDimensions(width, height))?;
        if pixels.len() != expected {
            return Err(EncodeError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self { width, height, pixels })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &'a [Rgb] {
        self.pixels
    }

    /// Rows in top-to-bottom order.
    pub fn rows(&self) -> impl Iterator<Item = &'a [Rgb]> + 'a {
        self.pixels.chunks_exact(self.width)
    }
}

/// 8-bit RGB image, either tone mapped from radiance or parsed from a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Largest sample value the data was encoded against (255 for our output)
    pub max_value: u8,
    /// Pixels in row-major order
    pub pixels: Vec<[u8; 3]>,
}
