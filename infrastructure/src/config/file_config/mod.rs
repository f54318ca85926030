//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod layout;
mod output;
mod tickets;

pub use layout::FileLayoutConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use tickets::FileTicketsConfig;

use bilet_application::GenerationConfig;
use bilet_domain::{ConfigIssue, SheetHeader};
use serde::{Deserialize, Serialize};

/// Sheet header section, stored as the domain type
pub type FileSheetConfig = SheetHeader;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Ticket count, repetition policy, seed
    pub tickets: FileTicketsConfig,
    /// Image bounds
    pub layout: FileLayoutConfig,
    /// Header fields printed on each ticket
    pub sheet: FileSheetConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.tickets.validate();
        issues.extend(self.layout.to_image_layout().1);
        issues
    }

    /// Effective generation settings before command-line overrides
    pub fn to_generation_config(&self) -> GenerationConfig {
        let config = GenerationConfig::default()
            .with_count(self.tickets.count)
            .with_policy(self.tickets.policy())
            .with_layout(self.layout.to_image_layout().0)
            .with_sheet(self.sheet.clone());
        match self.tickets.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}
