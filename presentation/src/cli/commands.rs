//! CLI command definitions

use bilet_application::GenerationConfig;
use bilet_domain::{ImageLayout, RepetitionPolicy, SheetHeader};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for generated tickets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Numbered preview of every ticket
    Text,
    /// Only the blocks found in the document
    Summary,
    /// Tickets as JSON on stdout
    Json,
}

impl From<OutputFormat> for bilet_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => bilet_domain::OutputFormat::Text,
            OutputFormat::Summary => bilet_domain::OutputFormat::Summary,
            OutputFormat::Json => bilet_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for bilet
#[derive(Parser, Debug)]
#[command(name = "bilet")]
#[command(author, version, about = "Exam ticket generator - one random question per block per ticket")]
#[command(long_about = r#"
bilet reads an exam document converted to HTML, finds the "I BLOK" .. "V BLOK"
sections, splits each into questions, and assembles tickets that take one
question from every block.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./bilet.toml        Project-level config
3. ~/.config/bilet/config.toml   Global config

Example:
  bilet exam.html
  bilet exam.html -n 30 --strict -o tickets.json
  bilet exam.html --format summary
"#)]
pub struct Cli {
    /// Converted exam document (HTML)
    pub input: Option<PathBuf>,

    /// Number of tickets to generate
    #[arg(short = 'n', long, value_name = "N")]
    pub count: Option<usize>,

    /// Refuse to repeat a question within a block
    #[arg(long)]
    pub strict: bool,

    /// Seed for a reproducible shuffle
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Maximum image width on the ticket, in pixels
    #[arg(long, value_name = "PX")]
    pub max_width: Option<u32>,

    /// Maximum image height on the ticket, in pixels
    #[arg(long, value_name = "PX")]
    pub max_height: Option<u32>,

    /// Export tickets to this JSON file
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Console output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Subject printed on every ticket
    #[arg(long, value_name = "TEXT")]
    pub subject: Option<String>,

    /// Student group printed on every ticket
    #[arg(long, value_name = "TEXT")]
    pub group: Option<String>,

    /// Exam date printed on every ticket
    #[arg(long, value_name = "TEXT")]
    pub exam_date: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of file configuration
    pub fn apply_to(&self, mut config: GenerationConfig) -> GenerationConfig {
        if let Some(count) = self.count {
            config = config.with_count(count);
        }
        if self.strict {
            config = config.with_policy(RepetitionPolicy::StrictNoRepeat);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.max_width.is_some() || self.max_height.is_some() {
            let layout = self.override_layout(&config.layout);
            config = config.with_layout(layout);
        }
        let sheet = self.override_sheet(config.sheet.clone());
        config.with_sheet(sheet)
    }

    fn override_layout(&self, layout: &ImageLayout) -> ImageLayout {
        ImageLayout {
            max_width: self.max_width.filter(|w| *w > 0).unwrap_or(layout.max_width),
            max_height: self.max_height.filter(|h| *h > 0).or(layout.max_height),
            fallback: layout.fallback,
        }
    }

    fn override_sheet(&self, mut sheet: SheetHeader) -> SheetHeader {
        for (value, field) in [
            (&self.subject, &mut sheet.subject),
            (&self.group, &mut sheet.group),
            (&self.exam_date, &mut sheet.exam_date),
        ] {
            if let Some(value) = value {
                *field = value.clone();
            }
        }
        sheet
    }
}
