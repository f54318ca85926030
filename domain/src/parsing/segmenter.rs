//! Numbered question segmentation.
//!
//! One converted paragraph can hold several questions (`1. ... 2. ...` on
//! separate lines), and one question can span several lines. When any line
//! carries a numbering marker, markers decide where questions start;
//! otherwise every non-blank line is its own question.

use crate::core::string::collapse_whitespace;
use regex::Regex;
use std::sync::LazyLock;

static NUMBERING_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[0-9]+[.)]\s+").expect("numbering marker pattern is valid")
});

/// Check whether a trimmed line starts a numbered question (`12. `, `3) `)
pub fn is_numbering_marker(line: &str) -> bool {
    NUMBERING_MARKER.is_match(line)
}

/// Split raw multi-line text into question strings.
///
/// # Examples
///
/// ```
/// use bilet_domain::parsing::split_numbered_questions;
///
/// let text = "1. What is TCP?\ncontinued here\n2) What is UDP?";
/// assert_eq!(
///     split_numbered_questions(text),
///     vec!["1. What is TCP? continued here", "2) What is UDP?"]
/// );
///
/// assert_eq!(split_numbered_questions("first\n\nsecond"), vec!["first", "second"]);
/// ```
pub fn split_numbered_questions(text: &str) -> Vec<String> {
    let mut questions = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut saw_marker = false;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            // keeps multi-paragraph questions together; inert otherwise
            if !current.is_empty() {
                current.push("");
            }
            continue;
        }

        if is_numbering_marker(line) {
            saw_marker = true;
            if !current.is_empty() {
                questions.push(flush(&current));
                current.clear();
            }
        }
        current.push(line);
    }

    if !current.is_empty() {
        questions.push(flush(&current));
    }

    if !saw_marker {
        return text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
    }

    questions.retain(|q| !q.is_empty());
    questions
}

fn flush(lines: &[&str]) -> String {
    collapse_whitespace(&lines.join(" "))
}
