//! Intrinsic image dimensions read straight from container headers.
//!
//! No codec is involved: each format keeps its pixel size at a well-known
//! place near the start of the file. A signature mismatch, a truncated header
//! or a zero axis all mean "unknown"; callers fall back to a default size.

use super::format::ImageFormat;
use super::size::PixelSize;

/// Probe the pixel size of a PNG, GIF, BMP or JPEG byte stream
pub fn probe_dimensions(bytes: &[u8]) -> Option<PixelSize> {
    match ImageFormat::sniff(bytes)? {
        ImageFormat::Png => png_dimensions(bytes),
        ImageFormat::Gif => gif_dimensions(bytes),
        ImageFormat::Bmp => bmp_dimensions(bytes),
        ImageFormat::Jpeg => jpeg_dimensions(bytes),
    }
}

fn png_dimensions(bytes: &[u8]) -> Option<PixelSize> {
    if bytes.len() < 24 || !bytes.starts_with(ImageFormat::png_signature()) {
        return None;
    }
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    PixelSize::try_new(width, height)
}

fn gif_dimensions(bytes: &[u8]) -> Option<PixelSize> {
    if bytes.len() < 10 {
        return None;
    }
    if &bytes[..6] != b"GIF87a" && &bytes[..6] != b"GIF89a" {
        return None;
    }
    let width = u16::from_le_bytes([bytes[6], bytes[7]]);
    let height = u16::from_le_bytes([bytes[8], bytes[9]]);
    PixelSize::try_new(width as u32, height as u32)
}

fn bmp_dimensions(bytes: &[u8]) -> Option<PixelSize> {
    if bytes.len() < 26 || &bytes[..2] != b"BM" {
        return None;
    }
    let width = i32::from_le_bytes([bytes[18], bytes[19], bytes[20], bytes[21]]);
    // top-down bitmaps store a negative height
    let height = i32::from_le_bytes([bytes[22], bytes[23], bytes[24], bytes[25]]);
    if width <= 0 {
        return None;
    }
    PixelSize::try_new(width as u32, height.unsigned_abs())
}

fn jpeg_dimensions(bytes: &[u8]) -> Option<PixelSize> {
    if bytes.len() < 4 || bytes[0] != 0xFF || bytes[1] != 0xD8 {
        return None;
    }
    let mut i = 2usize;
    loop {
        while i < bytes.len() && bytes[i] != 0xFF {
            i += 1;
        }
        // fill bytes
        while i < bytes.len() && bytes[i] == 0xFF {
            i += 1;
        }
        if i >= bytes.len() {
            return None;
        }
        let marker = bytes[i];
        i += 1;

        match marker {
            0xD9 | 0xDA => return None,
            // standalone markers carry no length field
            0x01 | 0xD0..=0xD7 => continue,
            _ => {}
        }

        if i + 2 > bytes.len() {
            return None;
        }
        let seg_len = u16::from_be_bytes([bytes[i], bytes[i + 1]]) as usize;
        if seg_len < 2 {
            return None;
        }
        // length(2) precision(1) height(2) width(2)
        if is_start_of_frame(marker) && seg_len >= 7 && i + 7 <= bytes.len() {
            let height = u16::from_be_bytes([bytes[i + 3], bytes[i + 4]]);
            let width = u16::from_be_bytes([bytes[i + 5], bytes[i + 6]]);
            if let Some(size) = PixelSize::try_new(width as u32, height as u32) {
                return Some(size);
            }
        }
        i += seg_len;
    }
}

fn is_start_of_frame(marker: u8) -> bool {
    matches!(
        marker,
        0xC0 | 0xC1 | 0xC2 | 0xC3 | 0xC5 | 0xC6 | 0xC7 | 0xC9 | 0xCA | 0xCB | 0xCD | 0xCE | 0xCF
    )
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    fn size(width: u32, height: u32) -> Option<PixelSize> {
        PixelSize::try_new(width, height)
    }

    #[test]
    fn test_png() {
        assert_eq!(probe_dimensions(&png(640, 960)), size(640, 960));
        assert_eq!(probe_dimensions(&png(0, 960)), None);
        assert_eq!(probe_dimensions(&png(640, 960)[..20]), None);
    }

    #[test]
    fn test_gif() {
        let gif = [b'G', b'I', b'F', b'8', b'9', b'a', 0x20, 0x03, 0x58, 0x02, 0, 0];
        assert_eq!(probe_dimensions(&gif), size(800, 600));

        let gif87 = [b'G', b'I', b'F', b'8', b'7', b'a', 0x10, 0x00, 0x08, 0x00];
        assert_eq!(probe_dimensions(&gif87), size(16, 8));
    }

    #[test]
    fn test_bmp_bottom_up_and_top_down() {
        assert_eq!(probe_dimensions(&bmp(300, 200)), size(300, 200));
        assert_eq!(probe_dimensions(&bmp(300, -200)), size(300, 200));
        assert_eq!(probe_dimensions(&bmp(-300, 200)), None);
        assert_eq!(probe_dimensions(&bmp(300, 0)), None);
    }

    #[test]
    fn test_jpeg_sof0() {
        assert_eq!(probe_dimensions(&jpeg(800, 600)), size(800, 600));
    }

    #[test]
    fn test_jpeg_progressive_with_fill_bytes() {
        let jpeg = [
            0xFF, 0xD8, // SOI
            0xFF, 0xFF, 0xFF, 0xC2, 0x00, 0x0B, // fill bytes + SOF2 len=11
            0x08, 0x00, 0x40, 0x00, 0x20, 0x01, 0x01, 0x11, 0x00, // 32x64
            0xFF, 0xD9,
        ];
        assert_eq!(probe_dimensions(&jpeg), size(32, 64));
    }

    #[test]
    fn test_jpeg_skips_zero_sized_frame() {
        let jpeg = [
            0xFF, 0xD8, // SOI
            0xFF, 0xC0, 0x00, 0x08, 0x08, 0x00, 0x00, 0x00, 0x10, 0x01, // height 0
            0xFF, 0xC1, 0x00, 0x08, 0x08, 0x00, 0x05, 0x00, 0x07, 0x01, // 7x5
            0xFF, 0xD9,
        ];
        assert_eq!(probe_dimensions(&jpeg), size(7, 5));
    }

    #[test]
    fn test_jpeg_stops_at_start_of_scan() {
        let jpeg = [
            0xFF, 0xD8, // SOI
            0xFF, 0xDA, 0x00, 0x08, 0x01, 0x01, 0x00, 0x00, 0x3F, 0x00, // SOS
            0xFF, 0xC0, 0x00, 0x08, 0x08, 0x00, 0x05, 0x00, 0x07, 0x01,
        ];
        assert_eq!(probe_dimensions(&jpeg), None);
    }

    #[test]
    fn test_jpeg_truncated() {
        let mut truncated = jpeg(800, 600);
        truncated.truncate(26);
        assert_eq!(probe_dimensions(&truncated), None);
    }

    #[test]
    fn test_unknown_signature() {
        assert_eq!(probe_dimensions(b"<svg width='10' height='10'/>"), None);
        assert_eq!(probe_dimensions(&[]), None);
    }
}
