use thiserror::Error;

use crate::frame_pipeline::raw::PixelFormat;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error(
        "Buffer size mismatch for {format} {width}x{height}: expected {expected} bytes, got {actual}"
    )]
    BufferSizeMismatch {
        format: PixelFormat,
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid JPEG quality: {0} (expected 0..=100)")]
    InvalidQuality(u8),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(u32, u32),

    #[error("Failed to demosaic image: {0}")]
    DemosaicError(String),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
