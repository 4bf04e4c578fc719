//! Decoded image data types

use std::fmt;

/// 2×2 color filter array layout, named by the first two samples of the
/// first row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CfaPattern {
    /// G R / B G
    Gr,
    /// R G / G B
    Rg,
    /// G B / R G
    Gb,
    /// B G / G R
    Bg,
}

impl fmt::Display for CfaPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Gr => "GR",
            Self::Rg => "RG",
            Self::Gb => "GB",
            Self::Bg => "BG",
        })
    }
}

/// Natural channel layout of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    /// 1 byte per pixel grayscale
    Gray8,
    /// 2 bytes per pixel grayscale, little-endian 16-bit cells
    Gray16,
    /// Interleaved B,G,R
    Bgr24,
    /// Interleaved B,G,R,A
    Bgra32,
    /// Interleaved (Y0,U,Y1,V) groups, 2 bytes per pixel
    Yuv422Interleaved,
    /// Single-channel Bayer mosaic with its CFA pattern
    BayerCfa(CfaPattern),
}

impl ChannelLayout {
    /// Bytes per image row for the given width.
    pub fn stride(self, width: u32) -> usize {
        let bytes_per_pixel = match self {
            Self::Gray8 | Self::BayerCfa(_) => 1,
            Self::Gray16 | Self::Yuv422Interleaved => 2,
            Self::Bgr24 => 3,
            Self::Bgra32 => 4,
        };
        bytes_per_pixel * width as usize
    }
}

/// A decoded frame in its natural channel layout.
///
/// Owns its pixel data outright; the driver buffer it was decoded from may
/// already be recycled by the time this value is observed.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Width of the image in pixels
    pub width: u32,
    /// Height of the image in pixels
    pub height: u32,
    /// Natural channel layout of `data`
    pub layout: ChannelLayout,
    /// Owned pixel data, exactly `layout.stride(width) * height` bytes
    pub data: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stride_per_layout() {
        assert_eq!(ChannelLayout::Gray8.stride(100), 100);
        assert_eq!(ChannelLayout::Gray16.stride(100), 200);
        assert_eq!(ChannelLayout::Bgr24.stride(100), 300);
        assert_eq!(ChannelLayout::Bgra32.stride(100), 400);
        assert_eq!(ChannelLayout::Yuv422Interleaved.stride(100), 200);
        assert_eq!(ChannelLayout::BayerCfa(CfaPattern::Rg).stride(100), 100);
    }
}
