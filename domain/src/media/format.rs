//! Raster container formats understood by the header probe and the writer.

use serde::{Deserialize, Serialize};

const PNG_SIGNATURE: &[u8; 8] = b"\x89PNG\r\n\x1a\n";

/// Image container format (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
}

impl ImageFormat {
    /// Identify the container from its leading signature bytes
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(PNG_SIGNATURE) {
            Some(Self::Png)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(Self::Gif)
        } else if bytes.starts_with(b"BM") {
            Some(Self::Bmp)
        } else if bytes.starts_with(&[0xFF, 0xD8]) {
            Some(Self::Jpeg)
        } else {
            None
        }
    }

    /// Map a MIME type to a format, defaulting to PNG for anything unknown
    pub fn from_content_type(content_type: &str) -> Self {
        let mime = content_type.to_ascii_lowercase();
        if mime.contains("png") {
            Self::Png
        } else if mime.contains("jpeg") || mime.contains("jpg") {
            Self::Jpeg
        } else if mime.contains("gif") {
            Self::Gif
        } else if mime.contains("bmp") {
            Self::Bmp
        } else {
            Self::Png
        }
    }

    /// Short type tag used by document writers
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
        }
    }

    pub(crate) fn png_signature() -> &'static [u8; 8] {
        PNG_SIGNATURE
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
