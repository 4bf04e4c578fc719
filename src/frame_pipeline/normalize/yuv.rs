//! Integer BT.601 YUV422 to BGR conversion.
//!
//! Fixed-point coefficients and round-half-up (+128 before the >>8) must
//! stay bit-for-bit stable: the display convention of the camera SDKs this
//! crate interoperates with uses exactly this arithmetic.

/// Convert packed YUV422 `(Y0,U,Y1,V)` groups to interleaved BGR24.
///
/// Each 4-byte group yields two BGR pixels sharing one chroma pair. The
/// output is always `width * height * 3` bytes: a frame with an odd pixel
/// count ends in a half group, and its final pixel stays zero-filled
/// instead of shrinking the buffer.
pub fn yuv422_to_bgr(yuv: &[u8], width: u32, height: u32) -> Vec<u8> {
    let out_len = width as usize * height as usize * 3;
    let mut bgr = Vec::with_capacity(out_len);

    for group in yuv.chunks_exact(4) {
        let (y0, u, y1, v) = (group[0], group[1], group[2], group[3]);
        push_bgr_pixel(&mut bgr, y0, u, v);
        push_bgr_pixel(&mut bgr, y1, u, v);
    }

    bgr.resize(out_len, 0);
    bgr
}

fn push_bgr_pixel(out: &mut Vec<u8>, y: u8, u: u8, v: u8) {
    let c = y as i32 - 16;
    let d = u as i32 - 128;
    let e = v as i32 - 128;

    let r = (298 * c + 409 * e + 128) >> 8;
    let g = (298 * c - 100 * d - 208 * e + 128) >> 8;
    let b = (298 * c + 516 * d + 128) >> 8;

    out.push(b.clamp(0, 255) as u8);
    out.push(g.clamp(0, 255) as u8);
    out.push(r.clamp(0, 255) as u8);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mid_gray_no_chroma() {
        // Y=128, U=V=128: c=112, d=e=0, all channels (298*112+128)>>8 = 130
        let bgr = yuv422_to_bgr(&[128, 128, 128, 128], 2, 1);
        assert_eq!(bgr, vec![130; 6]);
    }

    #[test]
    fn test_black_and_white_clamp() {
        // Y=235 is nominal white, Y=16 nominal black; chroma neutral
        let bgr = yuv422_to_bgr(&[235, 128, 16, 128], 2, 1);
        let white = ((298 * (235 - 16) + 128) >> 8).clamp(0, 255) as u8;
        assert_eq!(&bgr[0..3], &[white, white, white]);
        assert_eq!(&bgr[3..6], &[0, 0, 0]);
    }

    #[test]
    fn test_saturated_input_clamps() {
        // Y=255,U=255,V=0 drives G and B past 255; Y=0 drives R below 0
        let bgr = yuv422_to_bgr(&[255, 255, 0, 0], 2, 1);
        assert_eq!(&bgr[0..3], &[255, 255, 74]);
        assert_eq!(&bgr[3..6], &[237, 36, 0]);
    }

    #[test]
    fn test_odd_pixel_count_keeps_full_length() {
        // 3x1 frame: 6 bytes on the wire, one complete group plus a half
        // group. The half group cannot form a pixel; the slot is zero-filled
        // so the buffer still holds width*height pixels.
        let bgr = yuv422_to_bgr(&[128, 128, 128, 128, 235, 128], 3, 1);
        assert_eq!(bgr.len(), 9);
        assert_eq!(&bgr[0..6], &[130; 6]);
        assert_eq!(&bgr[6..9], &[0, 0, 0]);
    }

    #[test]
    fn test_two_pixels_share_chroma() {
        let bgr = yuv422_to_bgr(&[100, 128, 200, 128], 2, 1);
        // Neutral chroma: each pixel stays gray, lumas differ
        assert_eq!(bgr[0], bgr[1]);
        assert_eq!(bgr[1], bgr[2]);
        assert_eq!(bgr[3], bgr[4]);
        assert!(bgr[3] > bgr[0]);
    }
}
