//! Embedded image payloads (`data:` URIs).
//!
//! Converted documents inline every picture as
//! `data:<mime>;base64,<payload>`. Anything that does not have that shape
//! (external links, relative paths, percent-encoded data URIs) is treated as
//! unresolved and yields `None`. Nothing is ever fetched.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

/// MIME type assumed when the reference does not declare one
pub const DEFAULT_CONTENT_TYPE: &str = "image/png";

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64";

/// Converters are inconsistent about trailing `=` padding.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Raw bytes recovered from an embedded reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedPayload {
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Decode a `data:<mime>;base64,<payload>` reference.
///
/// Returns `None` for non-`data:` references, references without the
/// `;base64` marker or the comma separator, undecodable payloads and empty
/// payloads.
///
/// # Examples
///
/// ```
/// use bilet_domain::media::payload::decode_data_uri;
///
/// let payload = decode_data_uri("data:image/gif;base64,R0lGODlh").unwrap();
/// assert_eq!(payload.content_type, "image/gif");
/// assert_eq!(payload.data, b"GIF89a");
///
/// assert!(decode_data_uri("https://example.com/a.png").is_none());
/// ```
pub fn decode_data_uri(reference: &str) -> Option<EmbeddedPayload> {
    let reference = reference.trim();
    let scheme = reference.get(..SCHEME.len())?;
    if !scheme.eq_ignore_ascii_case(SCHEME) {
        return None;
    }

    let (meta, encoded) = reference[SCHEME.len()..].split_once(',')?;
    let mime = strip_suffix_ignore_ascii_case(meta, BASE64_MARKER)?;
    let mime = mime.split(';').next().unwrap_or_default().trim();
    let content_type = if mime.is_empty() {
        DEFAULT_CONTENT_TYPE.to_string()
    } else {
        mime.to_ascii_lowercase()
    };

    let cleaned: Vec<u8> = encoded
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    let data = PAYLOAD_ENGINE.decode(&cleaned).ok()?;
    if data.is_empty() {
        return None;
    }

    Some(EmbeddedPayload { content_type, data })
}

fn strip_suffix_ignore_ascii_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    let tail = s.get(split..)?;
    tail.eq_ignore_ascii_case(suffix).then(|| &s[..split])
}
