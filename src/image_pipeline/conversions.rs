//! Pipeline conversions module
//!
//! Orchestrates validation, tone mapping and PPM encoding of renderer output.

mod radiance_to_ppm;


pub use radiance_to_ppm::{RadianceToPpmPipeline, write_ppm};
