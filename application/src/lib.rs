//! Application layer for bilet
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_TICKET_COUNT, GenerationConfig};
pub use ports::{
    block_extractor::BlockExtractor,
    document_source::{DocumentSource, DocumentSourceError},
    progress::{NoProgress, ProgressNotifier, Stage},
    ticket_writer::{TicketWriter, TicketWriterError},
};
pub use use_cases::generate_tickets::{
    GenerateTicketsError, GenerateTicketsOutput, GenerateTicketsUseCase,
};
pub use use_cases::load_question_bank::{
    LoadQuestionBankError, LoadQuestionBankInput, LoadQuestionBankUseCase,
};
