//! Decoder for the GVSP wire formats produced by GigE/USB vision cameras.
//!
//! Every branch ends in a full copy into an owned buffer. The driver owns
//! the incoming buffer and may recycle it the instant decode returns, so no
//! output may alias it.

use tracing::debug;

use crate::frame_pipeline::common::error::{ConversionError, Result};
use crate::frame_pipeline::decode::decoder::FrameDecoder;
use crate::frame_pipeline::decode::types::{CfaPattern, ChannelLayout, DecodedImage};
use crate::frame_pipeline::raw::types::{PixelFormat, RawFrame};

pub struct GvspDecoder;

impl GvspDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GvspDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDecoder for GvspDecoder {
    fn decode(&self, frame: &RawFrame<'_>) -> Result<DecodedImage> {
        let expected = frame.pixel_format.expected_buffer_len(frame.width, frame.height);
        if frame.data.len() != expected {
            return Err(ConversionError::BufferSizeMismatch {
                format: frame.pixel_format,
                width: frame.width,
                height: frame.height,
                expected,
                actual: frame.data.len(),
            });
        }

        debug!(
            format = %frame.pixel_format,
            width = frame.width,
            height = frame.height,
            "Decoding frame"
        );

        let (layout, data) = match frame.pixel_format {
            PixelFormat::Mono8 => (ChannelLayout::Gray8, frame.data.to_vec()),

            // 10/12-bit values sit in the low bits of 16-bit cells; they are
            // carried through unshifted and scaled during normalization.
            PixelFormat::Mono10 | PixelFormat::Mono12 | PixelFormat::Mono16 => {
                (ChannelLayout::Gray16, frame.data.to_vec())
            }

            PixelFormat::Bgr8Packed => (ChannelLayout::Bgr24, frame.data.to_vec()),
            PixelFormat::Rgb8Packed => (ChannelLayout::Bgr24, swap_rb_3(frame.data)),

            PixelFormat::Bgra8Packed => (ChannelLayout::Bgra32, frame.data.to_vec()),
            PixelFormat::Rgba8Packed => (ChannelLayout::Bgra32, swap_rb_4(frame.data)),

            PixelFormat::Yuv422Packed | PixelFormat::Yuv422YuyvPacked => {
                (ChannelLayout::Yuv422Interleaved, frame.data.to_vec())
            }

            PixelFormat::BayerGr8 => (ChannelLayout::BayerCfa(CfaPattern::Gr), frame.data.to_vec()),
            PixelFormat::BayerRg8 => (ChannelLayout::BayerCfa(CfaPattern::Rg), frame.data.to_vec()),
            PixelFormat::BayerGb8 => (ChannelLayout::BayerCfa(CfaPattern::Gb), frame.data.to_vec()),
            PixelFormat::BayerBg8 => (ChannelLayout::BayerCfa(CfaPattern::Bg), frame.data.to_vec()),
        };

        Ok(DecodedImage {
            width: frame.width,
            height: frame.height,
            layout,
            data,
        })
    }
}

/// Swap R and B in interleaved 3-byte pixels.
fn swap_rb_3(src: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.len());
    for px in src.chunks_exact(3) {
        out.extend_from_slice(&[px[2], px[1], px[0]]);
    }
    out
}

/// Swap R and B in interleaved 4-byte pixels, keeping alpha in place.
fn swap_rb_4(src: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.len());
    for px in src.chunks_exact(4) {
        out.extend_from_slice(&[px[2], px[1], px[0], px[3]]);
    }
    out
}
