//! Ticket writers

mod json;

pub use json::JsonTicketWriter;
