//! Ticket generation configuration from TOML (`[tickets]` section)

use bilet_application::DEFAULT_TICKET_COUNT;
use bilet_domain::{ConfigIssue, ConfigIssueCode, RepetitionPolicy};
use serde::{Deserialize, Serialize};

/// Raw ticket configuration from TOML
///
/// # Example
///
/// ```toml
/// [tickets]
/// count = 25
/// strict_no_repeat = true
/// seed = 2024
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTicketsConfig {
    /// Number of tickets per run
    pub count: usize,
    /// Refuse to reuse a question across tickets
    pub strict_no_repeat: bool,
    /// Fixed shuffle seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for FileTicketsConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_TICKET_COUNT,
            strict_no_repeat: false,
            seed: None,
        }
    }
}

impl FileTicketsConfig {
    pub fn policy(&self) -> RepetitionPolicy {
        RepetitionPolicy::from_strict_flag(self.strict_no_repeat)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        if self.count == 0 {
            vec![ConfigIssue::error(
                ConfigIssueCode::ZeroTicketCount,
                "tickets.count must be at least 1",
            )]
        } else {
            vec![]
        }
    }
}
