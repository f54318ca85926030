//! Block header recognition.
//!
//! A header is a line starting with a Roman numeral I–V followed by the
//! word `BLOK`, e.g. `I BLOK`, `iv blok - Praktiki suallar`, `IIBLOK`.
//! The set of numerals is fixed.

use regex::Regex;
use std::sync::LazyLock;

static BLOCK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:I|II|III|IV|V)\s*BLOK").expect("block header pattern is valid")
});

/// Check whether trimmed element text opens a new block
pub fn is_block_header(text: &str) -> bool {
    BLOCK_HEADER.is_match(text)
}
