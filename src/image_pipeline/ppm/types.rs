//! PPM encoding configuration types

/// PPM variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PpmFormat {
    /// Plain text samples, `P3` marker (default)
    Plain,
    /// Raw byte samples, `P6` marker
    Binary,
}

impl PpmFormat {
    /// Magic number written on the first header line
    pub fn magic(self) -> &'static str {
        match self {
            PpmFormat::Plain => "P3",
            PpmFormat::Binary => "P6",
        }
    }
}

/// Configuration for radiance to PPM encoding
#[derive(Debug, Clone)]
pub struct EncodeConfig {
    /// Output variant
    pub format: PpmFormat,
    /// Write a space after every pixel's blue sample, including the last one.
    /// Only affects `PpmFormat::Plain`. When disabled, pixels are separated
    /// by single spaces and the body ends with a newline.
    pub trailing_space: bool,
    /// Write file output to a temporary sibling and rename it into place,
    /// so a failed encode never leaves a truncated file at the destination
    pub atomic_write: bool,
    /// Optional upper bound on width and height
    pub max_dimension: Option<usize>,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            format: PpmFormat::Plain,
            trailing_space: true,
            atomic_write: true,
            max_dimension: None,
        }
    }
}

impl EncodeConfig {
    pub fn builder() -> EncodeConfigBuilder {
        EncodeConfigBuilder::default()
    }
}

/// Builder for EncodeConfig
#[derive(Default)]
pub struct EncodeConfigBuilder {
    format: Option<PpmFormat>,
    trailing_space: Option<bool>,
    atomic_write: Option<bool>,
    max_dimension: Option<Option<usize>>,
}

impl EncodeConfigBuilder {
    pub fn format(mut self, format: PpmFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn trailing_space(mut self, enable: bool) -> Self {
        self.trailing_space = Some(enable);
        self
    }

    pub fn atomic_write(mut self, enable: bool) -> Self {
        self.atomic_write = Some(enable);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> EncodeConfig {
        let default = EncodeConfig::default();
        EncodeConfig {
            format: self.format.unwrap_or(default.format),
            trailing_space: self.trailing_space.unwrap_or(default.trailing_space),
            atomic_write: self.atomic_write.unwrap_or(default.atomic_write),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
