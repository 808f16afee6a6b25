use tracing::{info, instrument};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::image_pipeline::{
    common::error::{EncodeError, Result},
    radiance::{Rgb, RadianceImage},
    ppm::{PpmWriter, StandardPpmWriter, EncodeConfig},
};

pub struct RadianceToPpmPipeline<W: PpmWriter> {
    writer: W,
    config: EncodeConfig,
}

impl RadianceToPpmPipeline<StandardPpmWriter> {
    pub fn new(config: EncodeConfig) -> Self {
        Self {
            writer: StandardPpmWriter,
            config,
        }
    }
}

impl Default for RadianceToPpmPipeline<StandardPpmWriter> {
    fn default() -> Self {
        Self::new(EncodeConfig::default())
    }
}

impl<W: PpmWriter> RadianceToPpmPipeline<W> {
    pub fn with_custom(writer: W, config: EncodeConfig) -> Self {
        Self { writer, config }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                return Err(EncodeError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Encodes `image` into `output`. Nothing is written when validation fails.
    #[instrument(skip(self, image, output), fields(width = image.width(), height = image.height()))]
    pub fn encode(&self, image: &RadianceImage<'_>, output: &mut dyn Write) -> Result<()> {
        self.validate_dimensions(image.width(), image.height())?;

        {
            let _span = tracing::info_span!("encode_ppm", format = ?self.config.format).entered();
            self.writer.write_ppm(image, output, &self.config)?;
        }

        info!(
            width = image.width(),
            height = image.height(),
            "Encoding complete"
        );
        Ok(())
    }

    /// Encodes `image` to the file at `output_path`, creating or truncating it.
    ///
    /// With `atomic_write` enabled the data goes to a temporary file in the
    /// same directory which replaces `output_path` only once fully written and
    /// synced. An existing destination keeps its permissions and a symlinked
    /// destination keeps its link.
    #[instrument(skip(self, output_path, image))]
    pub fn encode_file<P: AsRef<Path>>(&self, output_path: P, image: &RadianceImage<'_>) -> Result<()> {
        let output_path = output_path.as_ref();

        info!(output = %output_path.display(), "Writing PPM file");

        self.validate_dimensions(image.width(), image.height())?;

        if !self.config.atomic_write {
            let mut output_file = {
                let _span = tracing::info_span!("create_output_file").entered();
                File::create(output_path).map_err(|e| {
                    EncodeError::OutputWriteError(format!("{}: {}", output_path.display(), e))
                })?
            };
            return self.encode(image, &mut output_file);
        }

        let target = resolve_destination(output_path)?;
        let existing_permissions = std::fs::metadata(&target).ok().map(|m| m.permissions());
        let write_error = |e: std::io::Error| {
            EncodeError::OutputWriteError(format!("{}: {}", output_path.display(), e))
        };

        let mut temp_file = {
            let _span = tracing::info_span!("create_temp_file").entered();
            let dir = match target.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let mut builder = tempfile::Builder::new();
            // Same mode File::create would give a new file once the umask applies
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                builder.permissions(std::fs::Permissions::from_mode(0o666));
            }
            builder.tempfile_in(dir).map_err(write_error)?
        };

        if let Some(permissions) = existing_permissions {
            temp_file.as_file().set_permissions(permissions).map_err(write_error)?;
        }

        self.encode(image, temp_file.as_file_mut())?;
        temp_file.as_file().sync_all()?;

        {
            let _span = tracing::info_span!("persist_output_file").entered();
            temp_file.persist(&target).map_err(|e| write_error(e.error))?;
        }

        Ok(())
    }

    pub fn config(&self) -> &EncodeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EncodeConfig) {
        self.config = config;
    }
}

/// Follows a symlinked destination so the rename replaces the file it points
/// at, not the link.
fn resolve_destination(path: &Path) -> Result<PathBuf> {
    let is_symlink = std::fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    if !is_symlink {
        return Ok(path.to_path_buf());
    }

    match std::fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        // Dangling link: the target does not exist yet, create it
        Err(_) => {
            let link = std::fs::read_link(path).map_err(|e| {
                EncodeError::OutputWriteError(format!("{}: {}", path.display(), e))
            })?;
            Ok(path.parent().unwrap_or(Path::new("")).join(link))
        }
    }
}

/// Tone maps `buffer` and writes it to `path` as a plain PPM with the default
/// configuration.
///
/// `buffer` is row-major and must hold exactly `width * height` pixels.
pub fn write_ppm<P: AsRef<Path>>(path: P, width: usize, height: usize, buffer: &[Rgb]) -> Result<()> {
    let image = RadianceImage::new(width, height, buffer)?;
    RadianceToPpmPipeline::default().encode_file(path, &image)
}
