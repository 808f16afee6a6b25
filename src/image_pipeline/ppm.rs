//! PPM writing module
//!
//! Encodes radiance images as portable pixel maps, in the plain (P3) text
//! variant or the binary (P6) variant, and parses plain maps back.

mod writer;
mod standard_ppm_writer;
mod reader;
pub mod types;

pub use writer::PpmWriter;
pub use standard_ppm_writer::StandardPpmWriter;
pub use reader::{parse_plain_ppm, read_plain_ppm};
pub use types::{PpmFormat, EncodeConfig, EncodeConfigBuilder};
