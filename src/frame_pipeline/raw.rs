//! Raw camera frame module
//!
//! This module defines the wire-level pixel formats delivered by GigE/USB
//! vision cameras and the borrowed frame view handed in by the driver.

pub mod types;

pub use types::{PixelFormat, RawFrame};
