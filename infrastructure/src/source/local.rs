//! Local file system document source
//!
//! Reads converted HTML from disk. Word documents must be converted first;
//! they are rejected with a hint instead of being parsed as garbage.

use async_trait::async_trait;
use bilet_application::{DocumentSource, DocumentSourceError};
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

const UNCONVERTED_EXTENSIONS: &[&str] = &["docx", "doc", "odt", "rtf", "pdf"];

/// Reads documents with `tokio::fs`
#[derive(Debug, Clone, Default)]
pub struct LocalDocumentSource;

impl LocalDocumentSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentSource for LocalDocumentSource {
    async fn load(&self, path: &Path) -> Result<String, DocumentSourceError> {
        if let Some(ext) = path.extension().and_then(|e| e.to_str())
            && UNCONVERTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
        {
            return Err(DocumentSourceError::Unsupported(path.display().to_string()));
        }

        debug!("Reading {}", path.display());
        let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => DocumentSourceError::NotFound(path.display().to_string()),
            _ => DocumentSourceError::ReadFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            },
        })?;

        // converters occasionally emit stray bytes; keep what is readable
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
