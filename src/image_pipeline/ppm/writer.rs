use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::radiance::types::RadianceImage;
use crate::image_pipeline::ppm::types::EncodeConfig;

pub trait PpmWriter {
    fn write_ppm(&self, image: &RadianceImage<'_>, output: &mut dyn Write, config: &EncodeConfig) -> Result<()>;
}
