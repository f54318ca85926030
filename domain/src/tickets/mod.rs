//! Exam ticket generation
//!
//! - [`assembly`] - draw one question per block for each ticket
//! - [`shuffle`] - injectable Fisher–Yates randomness
//! - [`render`] - attach image placement sizes for writers
//! - [`sheet`] - header fields printed on each ticket

pub mod assembly;
pub mod policy;
pub mod render;
pub mod sheet;
pub mod shuffle;

pub use assembly::{AssemblyError, Ticket, TicketQuestion, assemble_tickets, check_preconditions};
pub use policy::RepetitionPolicy;
pub use render::{RenderedImage, RenderedQuestion, RenderedTicket, render_tickets};
pub use sheet::SheetHeader;
pub use shuffle::{FixedSequenceSource, ShuffleSource, shuffle_in_place, shuffled_indices};
