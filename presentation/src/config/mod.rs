//! Presentation-level configuration
//!
//! Console format and color, after file settings and flags are merged.

use crate::cli::commands::Cli;
use bilet_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// JSON export destination
    pub export_path: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
            export_path: None,
        }
    }
}

impl OutputConfig {
    pub fn new(format: Option<OutputFormat>, color: bool, export_path: Option<PathBuf>) -> Self {
        Self {
            format: format.unwrap_or_default(),
            color,
            export_path,
        }
    }

    /// Flags win over file settings
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(format) = cli.format {
            self.format = format.into();
        }
        if cli.no_color {
            self.color = false;
        }
        if let Some(path) = &cli.out {
            self.export_path = Some(path.clone());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_file_values_without_flags() {
        let cli = Cli::try_parse_from(["bilet", "exam.html"]).unwrap();
        let config = OutputConfig::new(Some(OutputFormat::Summary), false, None).with_cli(&cli);
        assert_eq!(config.format, OutputFormat::Summary);
        assert!(!config.color);
        assert!(config.export_path.is_none());
    }

    #[test]
    fn test_flags_override_file_values() {
        let cli = Cli::try_parse_from([
            "bilet", "exam.html", "-f", "json", "--no-color", "-o", "out.json",
        ])
        .unwrap();
        let config = OutputConfig::new(None, true, Some(PathBuf::from("file.json"))).with_cli(&cli);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.color);
        assert_eq!(config.export_path, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_default_is_colored_text() {
        let config = OutputConfig::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.color);
    }
}
