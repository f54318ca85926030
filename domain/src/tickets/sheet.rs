//! Header fields printed above every ticket.

use serde::{Deserialize, Serialize};

pub const DEFAULT_UNIVERSITY: &str = "Bakı Biznes Universiteti";

/// Exam sheet metadata (Value Object)
///
/// Every field is free text; blank fields are left for handwriting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetHeader {
    pub university: String,
    pub subject: String,
    pub faculty: String,
    pub group: String,
    pub teacher: String,
    pub department: String,
    pub exam_date: String,
    pub head_of_department: String,
    pub author: String,
}

impl Default for SheetHeader {
    fn default() -> Self {
        Self {
            university: DEFAULT_UNIVERSITY.to_string(),
            subject: String::new(),
            faculty: String::new(),
            group: String::new(),
            teacher: String::new(),
            department: String::new(),
            exam_date: String::new(),
            head_of_department: String::new(),
            author: String::new(),
        }
    }
}

impl SheetHeader {
    /// Labelled fields in print order
    pub fn fields(&self) -> [(&'static str, &str); 9] {
        [
            ("University", self.university.as_str()),
            ("Subject", self.subject.as_str()),
            ("Faculty", self.faculty.as_str()),
            ("Group", self.group.as_str()),
            ("Teacher", self.teacher.as_str()),
            ("Department", self.department.as_str()),
            ("Exam date", self.exam_date.as_str()),
            ("Head of department", self.head_of_department.as_str()),
            ("Author", self.author.as_str()),
        ]
    }
}

/// Text for a header field, or a line to fill in by hand
pub fn field_or_blank(value: &str, width: usize) -> String {
    let value = value.trim();
    if value.is_empty() {
        "_".repeat(width)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_university() {
        let header = SheetHeader::default();
        assert_eq!(header.university, "Bakı Biznes Universiteti");
        assert!(header.subject.is_empty());
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let header: SheetHeader = serde_json::from_str(r#"{"subject": "Databases"}"#).unwrap();
        assert_eq!(header.subject, "Databases");
        assert_eq!(header.university, DEFAULT_UNIVERSITY);
    }

    #[test]
    fn test_field_or_blank() {
        assert_eq!(field_or_blank("  ", 5), "_____");
        assert_eq!(field_or_blank(" 12.01.2025 ", 5), "12.01.2025");
    }

    #[test]
    fn test_fields_in_print_order() {
        let header = SheetHeader::default();
        let fields = header.fields();
        assert_eq!(fields[0].0, "University");
        assert_eq!(fields[8].0, "Author");
    }
}
