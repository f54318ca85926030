//! Console output formatter for ticket runs

use crate::output::formatter::OutputFormatter;
use bilet_domain::tickets::sheet::field_or_blank;
use bilet_domain::{
    ConfigIssue, QuestionBank, RenderedQuestion, RenderedTicket, SheetHeader, StructureWarning,
};
use colored::Colorize;
use serde_json::json;

const BLANK_WIDTH: usize = 20;

/// Formats tickets and parse results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Numbered preview of every ticket, header fields first
    pub fn format_tickets(sheet: &SheetHeader, tickets: &[RenderedTicket<'_>]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Exam Tickets"));
        output.push('\n');
        for (label, value) in sheet.fields() {
            output.push_str(&format!(
                "{} {}\n",
                format!("{}:", label).cyan().bold(),
                field_or_blank(value, BLANK_WIDTH)
            ));
        }

        for ticket in tickets {
            output.push_str(&Self::section_header(&format!("Ticket #{}", ticket.number)));
            for (i, question) in ticket.questions.iter().enumerate() {
                output.push_str(&Self::format_question(i + 1, question));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    fn format_question(position: usize, question: &RenderedQuestion<'_>) -> String {
        let mut line = format!(
            "{}. {} {}\n",
            position,
            format!("[{}]", question.block_name).yellow(),
            question.text
        );
        for image in &question.images {
            line.push_str(&format!(
                "   {}\n",
                format!(
                    "[image {} {}x{}]",
                    image.format.as_str(),
                    image.size.width,
                    image.size.height
                )
                .dimmed()
            ));
        }
        line
    }

    /// Blocks found in a document with their question counts
    pub fn format_summary(bank: &QuestionBank) -> String {
        if bank.is_empty() {
            return format!(
                "{} No blocks found. Headers must read \"I BLOK\" through \"V BLOK\".\n",
                "!".yellow().bold()
            );
        }

        let mut output = Self::section_header("Blocks");
        for block in bank.blocks() {
            output.push_str(&format!(
                "  {} {} question(s)\n",
                format!("{:<10}", block.name()).bold(),
                block.len()
            ));
        }
        output.push_str(&format!(
            "\n{} {}\n",
            "Unique tickets possible:".cyan(),
            bank.max_unique_tickets()
        ));
        output
    }

    /// Structure warnings, one per line
    pub fn format_warnings(warnings: &[StructureWarning]) -> String {
        warnings
            .iter()
            .map(|w| format!("{} {}\n", "Warning:".yellow().bold(), w))
            .collect()
    }

    /// Configuration issues, errors in red
    pub fn format_config_issues(issues: &[ConfigIssue]) -> String {
        issues
            .iter()
            .map(|issue| {
                let label = if issue.is_error() {
                    "Config error:".red().bold()
                } else {
                    "Config warning:".yellow().bold()
                };
                format!("{} {}\n", label, issue.message)
            })
            .collect()
    }

    /// Tickets as JSON; image bytes are reported by length only
    pub fn format_json(sheet: &SheetHeader, tickets: &[RenderedTicket<'_>]) -> String {
        let tickets: Vec<_> = tickets
            .iter()
            .map(|ticket| {
                json!({
                    "number": ticket.number,
                    "questions": ticket.questions.iter().map(|q| json!({
                        "block": q.block_name,
                        "text": q.text,
                        "images": q.images.iter().map(|image| json!({
                            "format": image.format.as_str(),
                            "width": image.size.width,
                            "height": image.size.height,
                            "bytes": image.data.len(),
                        })).collect::<Vec<_>>(),
                    })).collect::<Vec<_>>(),
                })
            })
            .collect();
        serde_json::to_string_pretty(&json!({ "sheet": sheet, "tickets": tickets }))
            .unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_tickets(&self, sheet: &SheetHeader, tickets: &[RenderedTicket<'_>]) -> String {
        ConsoleFormatter::format_tickets(sheet, tickets)
    }

    fn format_json(&self, sheet: &SheetHeader, tickets: &[RenderedTicket<'_>]) -> String {
        ConsoleFormatter::format_json(sheet, tickets)
    }

    fn format_summary(&self, bank: &QuestionBank) -> String {
        ConsoleFormatter::format_summary(bank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bilet_domain::{
        Block, ConfigIssueCode, FixedSequenceSource, ImageLayout, PixelSize, Question,
        QuestionImage, RepetitionPolicy, assemble_tickets, render_tickets,
    };

    const PNG_HEADER: [u8; 24] = [
        0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13, b'I', b'H', b'D', b'R', 0,
        0, 0x04, 0x10, 0, 0, 0x01, 0x90,
    ];

    fn bank() -> QuestionBank {
        let image = QuestionImage::new(
            "image/png",
            PNG_HEADER.to_vec(),
            PixelSize::try_new(1040, 400),
            None,
        );
        QuestionBank::new(vec![
            Block::with_questions(
                "I BLOK",
                vec![
                    Question::text_only("Define a relation").unwrap(),
                    Question::text_only("Define a key").unwrap(),
                ],
            ),
            Block::with_questions(
                "II BLOK",
                vec![Question::new("Read the diagram", vec![image]).unwrap()],
            ),
        ])
    }

    #[test]
    fn test_ticket_preview() {
        let bank = bank();
        let tickets = assemble_tickets(
            bank.blocks(),
            2,
            RepetitionPolicy::WrapAllowed,
            &mut FixedSequenceSource::identity(),
        )
        .unwrap();
        let rendered = render_tickets(&tickets, &ImageLayout::default());
        let sheet = SheetHeader {
            subject: "Databases".to_string(),
            ..SheetHeader::default()
        };

        colored::control::set_override(false);
        let output = ConsoleFormatter::format_tickets(&sheet, &rendered);

        assert!(output.contains("Subject: Databases"));
        assert!(output.contains(&format!("Group: {}", "_".repeat(BLANK_WIDTH))));
        assert!(output.contains("Ticket #1"));
        assert!(output.contains("Ticket #2"));
        assert!(output.contains("1. [I BLOK] Define a relation"));
        assert!(output.contains("2. [II BLOK] Read the diagram"));
        assert!(output.contains("[image png 520x200]"));
    }

    #[test]
    fn test_summary_lists_blocks() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_summary(&bank());
        assert!(output.contains("I BLOK"));
        assert!(output.contains("2 question(s)"));
        assert!(output.contains("Unique tickets possible: 1"));
    }

    #[test]
    fn test_summary_of_empty_bank_gives_hint() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_summary(&QuestionBank::default());
        assert!(output.contains("No blocks found"));
    }

    #[test]
    fn test_json_omits_image_bytes() {
        let bank = bank();
        let tickets = assemble_tickets(
            bank.blocks(),
            1,
            RepetitionPolicy::StrictNoRepeat,
            &mut FixedSequenceSource::identity(),
        )
        .unwrap();
        let rendered = render_tickets(&tickets, &ImageLayout::default());

        let output = ConsoleFormatter::format_json(&SheetHeader::default(), &rendered);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["sheet"]["university"], "Bakı Biznes Universiteti");
        let image = &value["tickets"][0]["questions"][1]["images"][0];
        assert_eq!(image["format"], "png");
        assert_eq!(image["width"], 520);
        assert_eq!(image["bytes"], 24);
    }

    #[test]
    fn test_config_issues_and_warnings() {
        colored::control::set_override(false);
        let issues = vec![ConfigIssue::error(
            ConfigIssueCode::ZeroTicketCount,
            "tickets.count must be at least 1",
        )];
        let output = ConsoleFormatter::format_config_issues(&issues);
        assert_eq!(output, "Config error: tickets.count must be at least 1\n");

        let output = ConsoleFormatter::format_warnings(&[StructureWarning::Tables(2)]);
        assert!(output.starts_with("Warning: Found 2 table(s)"));
    }
}
