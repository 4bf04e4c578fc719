//! Raw frame data types

use std::fmt;

/// Wire-level pixel encoding of a captured frame, following the GVSP tag
/// names used by GigE Vision transport layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 8-bit grayscale, 1 byte per pixel
    Mono8,
    /// 10-bit grayscale in the low bits of a 16-bit little-endian cell
    Mono10,
    /// 12-bit grayscale in the low bits of a 16-bit little-endian cell
    Mono12,
    /// 16-bit grayscale, little-endian
    Mono16,
    /// Interleaved R,G,B triples
    Rgb8Packed,
    /// Interleaved B,G,R triples
    Bgr8Packed,
    /// Interleaved R,G,B,A quads
    Rgba8Packed,
    /// Interleaved B,G,R,A quads
    Bgra8Packed,
    /// YUV 4:2:2, 4-byte groups of (Y0, U, Y1, V)
    Yuv422Packed,
    /// YUV 4:2:2 YUYV ordering, same (Y0, U, Y1, V) group layout
    Yuv422YuyvPacked,
    /// 8-bit Bayer mosaic, first row starts G,R
    BayerGr8,
    /// 8-bit Bayer mosaic, first row starts R,G
    BayerRg8,
    /// 8-bit Bayer mosaic, first row starts G,B
    BayerGb8,
    /// 8-bit Bayer mosaic, first row starts B,G
    BayerBg8,
}

impl PixelFormat {
    /// Bytes occupied by one pixel on the wire.
    ///
    /// YUV422 averages 2 bytes per pixel: two luma samples share one chroma
    /// pair in each 4-byte group.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Mono8
            | Self::BayerGr8
            | Self::BayerRg8
            | Self::BayerGb8
            | Self::BayerBg8 => 1,
            Self::Mono10 | Self::Mono12 | Self::Mono16 => 2,
            Self::Yuv422Packed | Self::Yuv422YuyvPacked => 2,
            Self::Rgb8Packed | Self::Bgr8Packed => 3,
            Self::Rgba8Packed | Self::Bgra8Packed => 4,
        }
    }

    /// Exact byte count a frame of the given dimensions must carry.
    pub fn expected_buffer_len(self, width: u32, height: u32) -> usize {
        self.bytes_per_pixel() * width as usize * height as usize
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mono8 => "Mono8",
            Self::Mono10 => "Mono10",
            Self::Mono12 => "Mono12",
            Self::Mono16 => "Mono16",
            Self::Rgb8Packed => "RGB8_Packed",
            Self::Bgr8Packed => "BGR8_Packed",
            Self::Rgba8Packed => "RGBA8_Packed",
            Self::Bgra8Packed => "BGRA8_Packed",
            Self::Yuv422Packed => "YUV422_Packed",
            Self::Yuv422YuyvPacked => "YUV422_YUYV_Packed",
            Self::BayerGr8 => "BayerGR8",
            Self::BayerRg8 => "BayerRG8",
            Self::BayerGb8 => "BayerGB8",
            Self::BayerBg8 => "BayerBG8",
        };
        f.write_str(name)
    }
}

/// A captured frame as handed over by the camera driver.
///
/// The pixel buffer is borrowed: the driver typically recycles it as soon as
/// its paired release call runs, so nothing downstream may hold onto `data`
/// past the decode call. The decoder copies it into an owned buffer before
/// returning.
#[derive(Debug, Clone, Copy)]
pub struct RawFrame<'a> {
    /// Width of the frame in pixels
    pub width: u32,
    /// Height of the frame in pixels
    pub height: u32,
    /// Wire pixel encoding reported by the driver
    pub pixel_format: PixelFormat,
    /// Driver-owned pixel buffer, valid only for the duration of the call
    pub data: &'a [u8],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_buffer_len_per_format() {
        assert_eq!(PixelFormat::Mono8.expected_buffer_len(640, 480), 640 * 480);
        assert_eq!(PixelFormat::Mono12.expected_buffer_len(640, 480), 640 * 480 * 2);
        assert_eq!(PixelFormat::Rgb8Packed.expected_buffer_len(640, 480), 640 * 480 * 3);
        assert_eq!(PixelFormat::Bgra8Packed.expected_buffer_len(640, 480), 640 * 480 * 4);
        assert_eq!(PixelFormat::Yuv422Packed.expected_buffer_len(640, 480), 640 * 480 * 2);
        assert_eq!(PixelFormat::BayerRg8.expected_buffer_len(640, 480), 640 * 480);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(PixelFormat::Yuv422YuyvPacked.to_string(), "YUV422_YUYV_Packed");
        assert_eq!(PixelFormat::BayerGb8.to_string(), "BayerGB8");
    }
}
