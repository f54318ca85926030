//! Document source port
//!
//! Defines how the application obtains the converted (HTML) exam document.

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a document
#[derive(Error, Debug)]
pub enum DocumentSourceError {
    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Unsupported document type: {0} (convert it to HTML first)")]
    Unsupported(String),

    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },
}

/// Source of converted exam documents
///
/// Implementations live in the infrastructure layer.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Load the full HTML text of the document at `path`
    async fn load(&self, path: &Path) -> Result<String, DocumentSourceError>;
}
