//! Ticket writer port
//!
//! Receives fully resolved tickets (text, image bytes, placement sizes) and
//! owns every layout and serialization decision from there on.

use async_trait::async_trait;
use bilet_domain::{RenderedTicket, SheetHeader};
use thiserror::Error;

/// Errors that can occur while writing tickets
#[derive(Error, Debug)]
pub enum TicketWriterError {
    #[error("Failed to serialize tickets: {0}")]
    Serialization(String),

    #[error("Failed to write {path}: {message}")]
    WriteFailed { path: String, message: String },
}

/// Destination for generated tickets
#[async_trait]
pub trait TicketWriter: Send + Sync {
    /// Write every ticket of one run, returning a description of where
    /// they went (e.g. the file path)
    async fn write(
        &self,
        sheet: &SheetHeader,
        tickets: &[RenderedTicket<'_>],
    ) -> Result<String, TicketWriterError>;
}
