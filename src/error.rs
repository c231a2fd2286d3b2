use thiserror::Error;

/// Errors that can occur during vectorization.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum VectorizeError {
    #[error("invalid dimensions: {width}x{height} with {len} bytes of RGBA data")]
    InvalidDimensions { width: u32, height: u32, len: usize },

    #[error("failed to load image: {0}")]
    ImageLoad(String),

    #[error("failed to encode image: {0}")]
    Encode(String),

    #[error("invalid fill color: {0}")]
    InvalidColor(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
