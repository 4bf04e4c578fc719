//! Pixel decoding module
//!
//! This module classifies wire pixel formats and copies driver buffers into
//! owned, tagged images. No colorspace math happens here; decode only
//! reorders bytes where the wire order differs from the stored order.

mod decoder;
mod gvsp_decoder;
pub mod types;

pub use decoder::FrameDecoder;
pub use gvsp_decoder::GvspDecoder;
pub use types::{CfaPattern, ChannelLayout, DecodedImage};
