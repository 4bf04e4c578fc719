//! Frame processing pipeline module
//!
//! This module provides a structured approach to camera frame conversions,
//! with separate modules for pixel decoding, color normalization, blob
//! encoding, and conversion orchestration.

pub mod raw;
pub mod decode;
pub mod normalize;
pub mod encode;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    Result,
};

pub use raw::{
    PixelFormat,
    RawFrame,
};

pub use decode::{
    CfaPattern,
    ChannelLayout,
    DecodedImage,
    FrameDecoder,
    GvspDecoder,
};

pub use normalize::{
    CanonicalImage,
    ColorChannels,
    normalize,
};

pub use encode::{
    BlobEncoder,
    ConversionConfig,
    ConversionConfigBuilder,
    EncodedBlob,
    ImageFormat,
    StandardBlobEncoder,
};

pub use conversions::{
    FrameToBlobPipeline,
};
