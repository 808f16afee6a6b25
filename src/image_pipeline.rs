//! Image encoding pipeline module
//!
//! Turns linear floating-point renderer output into portable pixel maps,
//! with separate modules for radiance input, PPM writing and reading, and
//! conversion orchestration.

pub mod radiance;
pub mod ppm;
pub mod conversions;
pub mod common;

pub use common::{
    EncodeError,
    Result,
};

pub use radiance::{
    Rgb,
    RadianceImage,
    DisplayImage,
    tone_map_channel,
    tone_map_pixel,
    tone_map_image,
};

pub use ppm::{
    PpmFormat,
    EncodeConfig,
    EncodeConfigBuilder,
    PpmWriter,
    StandardPpmWriter,
    parse_plain_ppm,
    read_plain_ppm,
};

pub use conversions::{
    RadianceToPpmPipeline,
    write_ppm,
};
