//! Domain layer for bilet
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Blocks and Questions
//!
//! A converted exam document is a flat run of paragraphs and lists. Lines
//! such as `I BLOK` … `V BLOK` open a [`Block`]; everything under a header
//! becomes [`Question`]s, optionally carrying embedded images.
//!
//! ## Tickets
//!
//! A [`Ticket`] takes one question from every block. Blocks are shuffled
//! once per run; the [`RepetitionPolicy`] decides whether a block may wrap
//! around when it has fewer questions than tickets.

pub mod config;
pub mod core;
pub mod exam;
pub mod media;
pub mod parsing;
pub mod tickets;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use exam::{Block, Question, QuestionBank, QuestionImage, StructureWarning};
pub use media::{ImageFormat, ImageLayout, PixelSize};
pub use parsing::{DocumentNode, parse_blocks, parse_question_bank, split_numbered_questions};
pub use tickets::{
    AssemblyError, FixedSequenceSource, RenderedImage, RenderedQuestion, RenderedTicket,
    RepetitionPolicy, SheetHeader, ShuffleSource, Ticket, TicketQuestion, assemble_tickets,
    render_tickets,
};
