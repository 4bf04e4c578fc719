use crate::frame_pipeline::common::error::Result;
use crate::frame_pipeline::encode::types::{EncodedBlob, ImageFormat};
use crate::frame_pipeline::normalize::types::CanonicalImage;

pub trait BlobEncoder {
    fn encode(&self, image: &CanonicalImage, format: ImageFormat, quality: u8)
    -> Result<EncodedBlob>;
}
