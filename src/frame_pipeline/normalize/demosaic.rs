//! CPU demosaicing of 8-bit Bayer mosaics via the `bayer` crate.

use std::io::Cursor;

use bayer::{BayerDepth, CFA, Demosaic, RasterDepth, RasterMut};
use tracing::debug;

use crate::frame_pipeline::common::error::{ConversionError, Result};
use crate::frame_pipeline::decode::types::CfaPattern;

/// Map the GVSP first-row tag to the `bayer` crate's full 2×2 naming.
fn cfa_for_pattern(pattern: CfaPattern) -> CFA {
    match pattern {
        CfaPattern::Gr => CFA::GRBG,
        CfaPattern::Rg => CFA::RGGB,
        CfaPattern::Gb => CFA::GBRG,
        CfaPattern::Bg => CFA::BGGR,
    }
}

/// Demosaic an 8-bit Bayer mosaic to interleaved BGR24.
///
/// Linear interpolation; the measured sample of each CFA site is preserved
/// at its own pixel, which is the routing contract callers rely on. The
/// interpolated values between sites carry no exactness guarantee.
pub fn demosaic_to_bgr(
    mosaic: &[u8],
    width: u32,
    height: u32,
    pattern: CfaPattern,
) -> Result<Vec<u8>> {
    debug!(%pattern, width, height, "Demosaicing Bayer mosaic");

    let w = width as usize;
    let h = height as usize;
    let mut rgb = vec![0u8; w * h * 3];

    bayer::run_demosaic(
        &mut Cursor::new(mosaic),
        BayerDepth::Depth8,
        cfa_for_pattern(pattern),
        Demosaic::Linear,
        &mut RasterMut::new(w, h, RasterDepth::Depth8, &mut rgb),
    )
    .map_err(|e| ConversionError::DemosaicError(format!("{e:?}")))?;

    // The bayer crate emits RGB; downstream is BGR
    for px in rgb.chunks_exact_mut(3) {
        px.swap(0, 2);
    }

    Ok(rgb)
}
