use std::io::{BufWriter, Write};
use tracing::debug;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::radiance::{tone_map_pixel, RadianceImage};
use crate::image_pipeline::ppm::types::{EncodeConfig, PpmFormat};
use crate::image_pipeline::ppm::writer::PpmWriter;

/// Largest sample value; every header advertises it.
const MAX_VALUE: u8 = u8::MAX;

pub struct StandardPpmWriter;

impl StandardPpmWriter {
    fn write_plain(image: &RadianceImage<'_>, out: &mut impl Write, trailing_space: bool) -> Result<()> {
        let last = image.pixels().len() - 1;
        for (i, &pixel) in image.pixels().iter().enumerate() {
            let [r, g, b] = tone_map_pixel(pixel);
            let separator = if trailing_space || i < last { " " } else { "\n" };
            write!(out, "{} {} {}{}", r, g, b, separator)?;
        }
        Ok(())
    }

    fn write_binary(image: &RadianceImage<'_>, out: &mut impl Write) -> Result<()> {
        for row in image.rows() {
            let bytes: Vec<u8> = row.iter().flat_map(|&p| tone_map_pixel(p)).collect();
            out.write_all(&bytes)?;
        }
        Ok(())
    }
}

impl PpmWriter for StandardPpmWriter {
    fn write_ppm(&self, image: &RadianceImage<'_>, output: &mut dyn Write, config: &EncodeConfig) -> Result<()> {
        debug!("Encoding {:?} PPM image: {}x{}", config.format, image.width(), image.height());

        let mut out = BufWriter::new(output);
        write!(out, "{}\n{} {}\n{}\n", config.format.magic(), image.width(), image.height(), MAX_VALUE)?;

        match config.format {
            PpmFormat::Plain => Self::write_plain(image, &mut out, config.trailing_space)?,
            PpmFormat::Binary => Self::write_binary(image, &mut out)?,
        }

        out.flush()?;

        debug!("PPM encoding complete");
        Ok(())
    }
}
