//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod block_extractor;
pub mod document_source;
pub mod progress;
pub mod ticket_writer;
