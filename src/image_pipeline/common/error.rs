use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Pixel buffer holds {actual} pixels, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to parse PPM data: {0}")]
    ParseError(String),

    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EncodeError>;
