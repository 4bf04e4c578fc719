use crate::frame_pipeline::common::error::Result;
use crate::frame_pipeline::decode::types::DecodedImage;
use crate::frame_pipeline::raw::types::RawFrame;

pub trait FrameDecoder {
    fn decode(&self, frame: &RawFrame<'_>) -> Result<DecodedImage>;
}
