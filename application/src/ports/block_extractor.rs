//! Block extraction port
//!
//! Turns converted HTML into a [`QuestionBank`]. The domain parser is
//! written against an abstract tree; adapters bind it to an HTML library.

use bilet_domain::QuestionBank;

/// HTML → question blocks
///
/// Extraction never fails: anything unusable is skipped and an empty bank
/// means "nothing to work with".
pub trait BlockExtractor: Send + Sync {
    fn extract(&self, html: &str) -> QuestionBank;
}
