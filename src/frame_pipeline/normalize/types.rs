//! Canonical image data types

/// Channel count of a canonical image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChannels {
    /// 3 channels, interleaved B,G,R
    Bgr,
    /// 4 channels, interleaved B,G,R,A
    Bgra,
}

impl ColorChannels {
    pub fn count(self) -> usize {
        match self {
            Self::Bgr => 3,
            Self::Bgra => 4,
        }
    }
}

/// The single normalized representation all downstream consumers rely on:
/// 8-bit interleaved BGR or BGRA, row-major, no row padding.
#[derive(Debug, Clone)]
pub struct CanonicalImage {
    /// Width of the image in pixels
    pub width: u32,
    /// Height of the image in pixels
    pub height: u32,
    /// Channel count and order of `data`
    pub channels: ColorChannels,
    /// Interleaved pixel data, exactly `width * height * channels.count()` bytes
    pub data: Vec<u8>,
}

impl CanonicalImage {
    /// Project to single-channel grayscale with BT.601 integer luma.
    ///
    /// Weights are the fixed-point BGR coefficients (29, 150, 77) / 256 with
    /// round-half-up, matching the display-path grayscale conversion.
    pub fn to_gray(&self) -> Vec<u8> {
        let step = self.channels.count();
        self.data
            .chunks_exact(step)
            .map(|px| {
                let (b, g, r) = (px[0] as u32, px[1] as u32, px[2] as u32);
                ((29 * b + 150 * g + 77 * r + 128) >> 8) as u8
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_gray_weights() {
        let img = CanonicalImage {
            width: 2,
            height: 1,
            channels: ColorChannels::Bgr,
            data: vec![255, 255, 255, 0, 0, 255],
        };
        let gray = img.to_gray();
        assert_eq!(gray[0], 255);
        // Pure red: (77 * 255 + 128) >> 8
        assert_eq!(gray[1], ((77 * 255 + 128) >> 8) as u8);
    }

    #[test]
    fn test_to_gray_ignores_alpha() {
        let img = CanonicalImage {
            width: 1,
            height: 1,
            channels: ColorChannels::Bgra,
            data: vec![100, 100, 100, 0],
        };
        assert_eq!(img.to_gray(), vec![100]);
    }
}
