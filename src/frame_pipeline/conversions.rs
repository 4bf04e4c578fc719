//! Pipeline conversions module
//!
//! This module contains orchestration logic for turning raw camera frames
//! into encoded image blobs.

mod frame_to_blob;

pub use frame_to_blob::FrameToBlobPipeline;
