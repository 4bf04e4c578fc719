//! Color normalization module
//!
//! This module canonicalizes any decoded layout to 8-bit interleaved BGR or
//! BGRA, applying YUV conversion, Bayer demosaicing, bit-depth reduction and
//! alpha handling as needed.

pub mod demosaic;
mod normalizer;
pub mod types;
pub mod yuv;

pub use normalizer::normalize;
pub use types::{CanonicalImage, ColorChannels};
