//! Output format value object

use serde::{Deserialize, Serialize};

/// How generated tickets are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Numbered preview of every ticket (default)
    #[default]
    Text,
    /// Only the list of blocks and their question counts
    Summary,
    /// Full tickets as JSON
    Json,
}
