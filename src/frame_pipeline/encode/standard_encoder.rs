use tracing::debug;

use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::frame_pipeline::common::error::{ConversionError, Result};
use crate::frame_pipeline::encode::encoder::BlobEncoder;
use crate::frame_pipeline::encode::types::{EncodedBlob, ImageFormat};
use crate::frame_pipeline::normalize::types::{CanonicalImage, ColorChannels};

/// Encoder backed by the `image` crate's BMP/PNG/JPEG codecs.
pub struct StandardBlobEncoder;

impl BlobEncoder for StandardBlobEncoder {
    fn encode(
        &self,
        image: &CanonicalImage,
        format: ImageFormat,
        quality: u8,
    ) -> Result<EncodedBlob> {
        if format == ImageFormat::Jpeg && quality > 100 {
            return Err(ConversionError::InvalidQuality(quality));
        }

        debug!(
            ?format,
            width = image.width,
            height = image.height,
            "Encoding canonical image"
        );

        let mut out = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut out);

        match format {
            ImageFormat::Bmp => {
                let (pixels, color) = to_rgb_order(image, true);
                BmpEncoder::new(&mut cursor)
                    .write_image(&pixels, image.width, image.height, color)
                    .map_err(|e| ConversionError::EncodeError(e.to_string()))?;
            }
            ImageFormat::Png => {
                let (pixels, color) = to_rgb_order(image, true);
                PngEncoder::new(&mut cursor)
                    .write_image(&pixels, image.width, image.height, color)
                    .map_err(|e| ConversionError::EncodeError(e.to_string()))?;
            }
            ImageFormat::Jpeg => {
                // JPEG has no alpha channel
                let (pixels, color) = to_rgb_order(image, false);
                JpegEncoder::new_with_quality(&mut cursor, quality)
                    .write_image(&pixels, image.width, image.height, color)
                    .map_err(|e| ConversionError::EncodeError(e.to_string()))?;
            }
        }
        drop(cursor);

        debug!(bytes = out.len(), "Encoding complete");

        Ok(EncodedBlob { format, data: out })
    }
}

/// Reorder canonical BGR(A) into the RGB(A) the `image` codecs expect,
/// dropping alpha when the target cannot carry it.
fn to_rgb_order(image: &CanonicalImage, keep_alpha: bool) -> (Vec<u8>, ExtendedColorType) {
    match image.channels {
        ColorChannels::Bgr => {
            let rgb = image
                .data
                .chunks_exact(3)
                .flat_map(|px| [px[2], px[1], px[0]])
                .collect();
            (rgb, ExtendedColorType::Rgb8)
        }
        ColorChannels::Bgra if keep_alpha => {
            let rgba = image
                .data
                .chunks_exact(4)
                .flat_map(|px| [px[2], px[1], px[0], px[3]])
                .collect();
            (rgba, ExtendedColorType::Rgba8)
        }
        ColorChannels::Bgra => {
            let rgb = image
                .data
                .chunks_exact(4)
                .flat_map(|px| [px[2], px[1], px[0]])
                .collect();
            (rgb, ExtendedColorType::Rgb8)
        }
    }
}
