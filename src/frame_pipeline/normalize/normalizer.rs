use tracing::debug;

use crate::frame_pipeline::common::error::Result;
use crate::frame_pipeline::decode::types::{ChannelLayout, DecodedImage};
use crate::frame_pipeline::normalize::demosaic::demosaic_to_bgr;
use crate::frame_pipeline::normalize::types::{CanonicalImage, ColorChannels};
use crate::frame_pipeline::normalize::yuv::yuv422_to_bgr;

/// Canonicalize a decoded image to 8-bit interleaved BGR24, or BGRA32 when
/// `want_alpha` is set.
///
/// Total over every layout the decoder can produce. The only failure path
/// is the demosaic library rejecting its raster, which cannot happen for
/// size-validated decoder output.
pub fn normalize(image: &DecodedImage, want_alpha: bool) -> Result<CanonicalImage> {
    debug!(
        layout = ?image.layout,
        width = image.width,
        height = image.height,
        want_alpha,
        "Normalizing image"
    );

    let bgr = match image.layout {
        ChannelLayout::Gray8 => {
            return Ok(from_gray(&image.data, image, want_alpha));
        }
        // Display convention: 16-bit cells scale to 8 bits by truncating
        // right-shift, not round-to-nearest.
        ChannelLayout::Gray16 => {
            let gray: Vec<u8> = image
                .data
                .chunks_exact(2)
                .map(|cell| (u16::from_le_bytes([cell[0], cell[1]]) >> 8) as u8)
                .collect();
            return Ok(from_gray(&gray, image, want_alpha));
        }
        ChannelLayout::Bgr24 => image.data.clone(),
        ChannelLayout::Bgra32 => {
            if want_alpha {
                return Ok(CanonicalImage {
                    width: image.width,
                    height: image.height,
                    channels: ColorChannels::Bgra,
                    data: image.data.clone(),
                });
            }
            image.data.chunks_exact(4).flat_map(|px| [px[0], px[1], px[2]]).collect()
        }
        ChannelLayout::Yuv422Interleaved => yuv422_to_bgr(&image.data, image.width, image.height),
        ChannelLayout::BayerCfa(pattern) => {
            demosaic_to_bgr(&image.data, image.width, image.height, pattern)?
        }
    };

    if want_alpha {
        Ok(CanonicalImage {
            width: image.width,
            height: image.height,
            channels: ColorChannels::Bgra,
            data: widen_with_alpha(&bgr),
        })
    } else {
        Ok(CanonicalImage {
            width: image.width,
            height: image.height,
            channels: ColorChannels::Bgr,
            data: bgr,
        })
    }
}

fn from_gray(gray: &[u8], image: &DecodedImage, want_alpha: bool) -> CanonicalImage {
    let (channels, data) = if want_alpha {
        (
            ColorChannels::Bgra,
            gray.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        )
    } else {
        (
            ColorChannels::Bgr,
            gray.iter().flat_map(|&v| [v, v, v]).collect(),
        )
    };
    CanonicalImage {
        width: image.width,
        height: image.height,
        channels,
        data,
    }
}

fn widen_with_alpha(bgr: &[u8]) -> Vec<u8> {
    bgr.chunks_exact(3).flat_map(|px| [px[0], px[1], px[2], 255]).collect()
}
