//! Blob encoding module
//!
//! This module serializes canonical images to BMP, PNG or JPEG byte blobs.

mod encoder;
mod standard_encoder;
pub mod types;

pub use encoder::BlobEncoder;
pub use standard_encoder::StandardBlobEncoder;
pub use types::{ConversionConfig, ConversionConfigBuilder, EncodedBlob, ImageFormat};
