//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid image size {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },
}

impl DomainError {
    /// Check if this error concerns a question record
    pub fn is_invalid_question(&self) -> bool {
        matches!(self, DomainError::InvalidQuestion(_))
    }
}
