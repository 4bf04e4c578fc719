use tracing::{info, instrument};

use std::path::Path;

use crate::frame_pipeline::{
    common::error::{ConversionError, Result},
    decode::{FrameDecoder, GvspDecoder},
    encode::{BlobEncoder, ConversionConfig, EncodedBlob, ImageFormat, StandardBlobEncoder},
    normalize::{CanonicalImage, normalize},
    raw::RawFrame,
};

/// The decode → normalize → encode chain behind a single entry point.
///
/// Both the display path ([`Self::to_canonical`]) and the save path
/// ([`Self::convert`]) consume the same canonical image; neither re-derives
/// it from the raw frame. Stateless between calls, so independent frames may
/// be converted concurrently from multiple acquisition threads.
pub struct FrameToBlobPipeline<D: FrameDecoder, E: BlobEncoder> {
    decoder: D,
    encoder: E,
    config: ConversionConfig,
}

impl FrameToBlobPipeline<GvspDecoder, StandardBlobEncoder> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            decoder: GvspDecoder::new(),
            encoder: StandardBlobEncoder,
            config,
        }
    }
}

impl<D: FrameDecoder, E: BlobEncoder> FrameToBlobPipeline<D, E> {
    pub fn with_custom(decoder: D, encoder: E, config: ConversionConfig) -> Self {
        Self {
            decoder,
            encoder,
            config,
        }
    }

    fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    /// Decode and normalize a frame for display.
    #[instrument(skip(self, frame), fields(format = %frame.pixel_format))]
    pub fn to_canonical(&self, frame: &RawFrame<'_>) -> Result<CanonicalImage> {
        self.validate_dimensions(frame.width, frame.height)?;

        let decoded = {
            let _span = tracing::info_span!("decode_frame").entered();
            self.decoder.decode(frame)?
        };

        let _span = tracing::info_span!("normalize").entered();
        normalize(&decoded, self.config.want_alpha)
    }

    /// Run the full chain and produce an encoded blob in the configured
    /// container format.
    #[instrument(skip(self, frame), fields(format = %frame.pixel_format, frame_size = frame.data.len()))]
    pub fn convert(&self, frame: &RawFrame<'_>) -> Result<EncodedBlob> {
        self.convert_as(frame, self.config.format)
    }

    fn convert_as(&self, frame: &RawFrame<'_>, format: ImageFormat) -> Result<EncodedBlob> {
        info!("Starting frame conversion");

        let canonical = self.to_canonical(frame)?;

        let blob = {
            let _span = tracing::info_span!("encode_blob").entered();
            self.encoder.encode(&canonical, format, self.config.jpeg_quality)?
        };

        info!(
            width = canonical.width,
            height = canonical.height,
            bytes = blob.data.len(),
            "Conversion complete"
        );
        Ok(blob)
    }

    /// Convert a frame and write it to `path`, deriving the container format
    /// from the file extension. An unrecognized or missing extension fails
    /// with [`ConversionError::UnsupportedFormat`].
    #[instrument(skip(self, frame, path))]
    pub fn save_frame<P: AsRef<Path>>(&self, frame: &RawFrame<'_>, path: P) -> Result<()> {
        let path = path.as_ref();

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| {
                ConversionError::UnsupportedFormat(format!("no file extension: {}", path.display()))
            })?;
        let format = ImageFormat::from_extension(ext)?;

        info!(output = %path.display(), ?format, "Saving frame");

        let blob = self.convert_as(frame, format)?;

        let _span = tracing::info_span!("write_output_file").entered();
        std::fs::write(path, &blob.data)?;

        Ok(())
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
