//! Output formatter trait

use bilet_domain::{QuestionBank, RenderedTicket, SheetHeader};

/// Trait for formatting ticket runs
pub trait OutputFormatter {
    /// Numbered preview of every ticket
    fn format_tickets(&self, sheet: &SheetHeader, tickets: &[RenderedTicket<'_>]) -> String;

    /// Format as JSON
    fn format_json(&self, sheet: &SheetHeader, tickets: &[RenderedTicket<'_>]) -> String;

    /// Blocks found in the document
    fn format_summary(&self, bank: &QuestionBank) -> String;
}
