//! Application-level configuration.
//!
//! - [`GenerationConfig`] - merged settings for one ticket run

pub mod generation;

pub use generation::{DEFAULT_TICKET_COUNT, GenerationConfig};
