//! Encoding configuration types

use crate::frame_pipeline::common::error::{ConversionError, Result};

/// Container formats the encoder can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Uncompressed bitmap (fastest, largest file)
    Bmp,
    /// Lossless PNG
    Png,
    /// Lossy JPEG with a quality parameter
    Jpeg,
}

impl ImageFormat {
    /// Derive the container format from a file extension.
    ///
    /// Unrecognized extensions are an error, never a silent BMP fallback:
    /// a wrong extension means a caller bug and must surface as one.
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "bmp" => Ok(Self::Bmp),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            other => Err(ConversionError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// An encoded image ready for file write or transfer.
#[derive(Debug, Clone)]
pub struct EncodedBlob {
    /// Container format of `data`
    pub format: ImageFormat,
    /// Encoded bytes
    pub data: Vec<u8>,
}

/// Configuration for frame-to-blob conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Container format to encode into
    pub format: ImageFormat,
    /// JPEG quality in [0, 100]; ignored for BMP and PNG
    pub jpeg_quality: u8,
    /// Whether the canonical image carries an alpha channel
    pub want_alpha: bool,
    /// Whether to reject zero-sized frames before decoding
    pub validate_dimensions: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            format: ImageFormat::Bmp,
            jpeg_quality: 95,
            want_alpha: false,
            validate_dimensions: true,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    format: Option<ImageFormat>,
    jpeg_quality: Option<u8>,
    want_alpha: Option<bool>,
    validate_dimensions: Option<bool>,
}

impl ConversionConfigBuilder {
    pub fn format(mut self, format: ImageFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = Some(quality);
        self
    }

    pub fn want_alpha(mut self, want_alpha: bool) -> Self {
        self.want_alpha = Some(want_alpha);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            format: self.format.unwrap_or(default.format),
            jpeg_quality: self.jpeg_quality.unwrap_or(default.jpeg_quality),
            want_alpha: self.want_alpha.unwrap_or(default.want_alpha),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(ImageFormat::from_extension("png").unwrap(), ImageFormat::Png);
        assert_eq!(ImageFormat::from_extension("JPG").unwrap(), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_extension("jpeg").unwrap(), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_extension("bmp").unwrap(), ImageFormat::Bmp);
    }

    #[test]
    fn test_unknown_extension_is_an_error_not_bmp() {
        assert!(matches!(
            ImageFormat::from_extension("tiff"),
            Err(ConversionError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_config_builder() {
        let config = ConversionConfig::builder()
            .format(ImageFormat::Jpeg)
            .jpeg_quality(80)
            .want_alpha(true)
            .validate_dimensions(false)
            .build();

        assert_eq!(config.format, ImageFormat::Jpeg);
        assert_eq!(config.jpeg_quality, 80);
        assert!(config.want_alpha);
        assert!(!config.validate_dimensions);
    }

    #[test]
    fn test_config_defaults() {
        let config = ConversionConfig::default();
        assert_eq!(config.format, ImageFormat::Bmp);
        assert_eq!(config.jpeg_quality, 95);
        assert!(!config.want_alpha);
        assert!(config.validate_dimensions);
    }
}
