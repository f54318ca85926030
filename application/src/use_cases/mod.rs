//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod generate_tickets;
pub mod load_question_bank;
