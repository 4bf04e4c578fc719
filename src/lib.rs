//! Frame conversion library for industrial machine-vision cameras.
//!
//! Turns raw GigE/USB sensor frames (mono, packed RGB, YUV422, Bayer CFA,
//! 10/12/16-bit mono) into displayable BGR/BGRA images and encodes them to
//! BMP, PNG or JPEG.

pub mod frame_pipeline;
pub mod logger;
