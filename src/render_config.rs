//! Renderer configuration
//!
//! Build-time constants of the path tracer gathered into one immutable value
//! that is created at startup and passed by reference to whoever needs it.

use crate::image_pipeline::common::error::{EncodeError, Result};

/// Pi as the renderer kernels use it
#[allow(clippy::approx_constant)]
pub const PI: f32 = 3.14159265359;

/// Path tracer settings
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: usize,
    /// Output height in pixels
    pub height: usize,
    /// Monte-Carlo samples accumulated per pixel
    pub samples_per_pixel: u32,
    /// Maximum number of bounces traced per path
    pub max_bounces: u32,
    /// Edge length of a square thread block
    pub block_size: usize,
    /// Number of kernel launches the sample budget is split across
    pub kernel_loop: u32,
    /// Geometric tolerance for self-intersection tests
    pub epsilon: f32,
    /// Distance reported for a ray that hits nothing
    pub infinity: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 384,
            samples_per_pixel: 512,
            max_bounces: 4,
            block_size: 8,
            kernel_loop: 10,
            epsilon: 0.0001,
            infinity: 1e20,
        }
    }
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Thread blocks needed to cover the image, `width * height / block_size²`.
    /// Pixels left over by dimensions that are not block multiples are not counted.
    pub fn num_blocks(&self) -> usize {
        self.pixel_count() / self.block_size / self.block_size
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(EncodeError::InvalidDimensions(self.width, self.height));
        }
        if self.block_size == 0 {
            return Err(EncodeError::InvalidConfig("block size must be positive".to_string()));
        }
        if self.samples_per_pixel == 0 {
            return Err(EncodeError::InvalidConfig("samples per pixel must be positive".to_string()));
        }
        if self.kernel_loop == 0 {
            return Err(EncodeError::InvalidConfig("kernel loop count must be positive".to_string()));
        }
        if !(self.epsilon > 0.0) {
            return Err(EncodeError::InvalidConfig(format!("epsilon must be positive, got {}", self.epsilon)));
        }
        if !(self.infinity > self.epsilon) {
            return Err(EncodeError::InvalidConfig(format!(
                "infinity sentinel {} must exceed epsilon {}",
                self.infinity, self.epsilon
            )));
        }
        Ok(())
    }
}

/// Builder for RenderConfig
#[derive(Default)]
pub struct RenderConfigBuilder {
    width: Option<usize>,
    height: Option<usize>,
    samples_per_pixel: Option<u32>,
    max_bounces: Option<u32>,
    block_size: Option<usize>,
    kernel_loop: Option<u32>,
    epsilon: Option<f32>,
    infinity: Option<f32>,
}

impl RenderConfigBuilder {
    pub fn dimensions(mut self, width: usize, height: usize) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn samples_per_pixel(mut self, samples: u32) -> Self {
        self.samples_per_pixel = Some(samples);
        self
    }

    pub fn max_bounces(mut self, bounces: u32) -> Self {
        self.max_bounces = Some(bounces);
        self
    }

    pub fn block_size(mut self, size: usize) -> Self {
        self.block_size = Some(size);
        self
    }

    pub fn kernel_loop(mut self, count: u32) -> Self {
        self.kernel_loop = Some(count);
        self
    }

    pub fn epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = Some(epsilon);
        self
    }

    pub fn infinity(mut self, infinity: f32) -> Self {
        self.infinity = Some(infinity);
        self
    }

    pub fn build(self) -> RenderConfig {
        let default = RenderConfig::default();
        RenderConfig {
            width: self.width.unwrap_or(default.width),
            height: self.height.unwrap_or(default.height),
            samples_per_pixel: self.samples_per_pixel.unwrap_or(default.samples_per_pixel),
            max_bounces: self.max_bounces.unwrap_or(default.max_bounces),
            block_size: self.block_size.unwrap_or(default.block_size),
            kernel_loop: self.kernel_loop.unwrap_or(default.kernel_loop),
            epsilon: self.epsilon.unwrap_or(default.epsilon),
            infinity: self.infinity.unwrap_or(default.infinity),
        }
    }
}
