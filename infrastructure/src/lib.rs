//! Infrastructure layer for bilet
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod html;
pub mod random;
pub mod source;
pub mod writer;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileLayoutConfig, FileOutputConfig, FileOutputFormat,
    FileSheetConfig, FileTicketsConfig,
};
pub use html::{ScraperBlockExtractor, ScraperNode};
pub use random::{RngSource, shuffle_source};
pub use source::LocalDocumentSource;
pub use writer::JsonTicketWriter;
