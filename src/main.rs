use anyhow::{Context, Result};
use radiance_ppm::image_pipeline::{EncodeConfig, RadianceImage, RadianceToPpmPipeline, Rgb};
use radiance_ppm::logger;
use radiance_ppm::render_config::RenderConfig;

use tracing::{error, info};

const DEFAULT_OUTPUT: &str = "output.ppm";

/// Linear test ramp: red runs past 1.0 across the width, green goes
/// negative near the bottom, blue holds mid grey. Exercises both clamps.
fn test_ramp(config: &RenderConfig) -> Vec<Rgb> {
    let (width, height) = (config.width, config.height);
    (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                let u = x as f32 / width as f32;
                let v = y as f32 / height as f32;
                Rgb::new(u * 1.25, 1.0 - v * 1.25, 0.5)
            })
        })
        .collect()
}

fn run(output_path: &str) -> Result<()> {
    let render_config = RenderConfig::default();
    render_config.validate().context("invalid render configuration")?;

    info!(
        "Render settings: {}x{}, {} spp, {} bounces, {} blocks",
        render_config.width,
        render_config.height,
        render_config.samples_per_pixel,
        render_config.max_bounces,
        render_config.num_blocks()
    );

    let pixels = test_ramp(&render_config);
    let image = RadianceImage::new(render_config.width, render_config.height, &pixels)?;

    let pipeline = RadianceToPpmPipeline::new(EncodeConfig::default());
    info!("Format: {:?}", pipeline.config().format);

    pipeline
        .encode_file(output_path, &image)
        .with_context(|| format!("failed to write {}", output_path))?;

    Ok(())
}

fn main() {
    logger::init();

    info!("Starting radiance_ppm...");

    let output_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    match run(&output_path) {
        Ok(()) => info!("Wrote {}", output_path),
        Err(e) => {
            error!("Encoding failed: {:#}", e);
            std::process::exit(1);
        }
    }
}
