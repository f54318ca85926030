//! Progress notification port
//!
//! Defines the interface for reporting progress while a document is loaded
//! and tickets are generated.

use std::fmt;

/// Steps of one run, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Parse,
    Assemble,
    Write,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Load => "Loading document",
            Stage::Parse => "Parsing blocks",
            Stage::Assemble => "Assembling tickets",
            Stage::Write => "Writing tickets",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Callback for progress updates
///
/// Implementations live in the presentation layer.
pub trait ProgressNotifier: Send + Sync {
    /// Called when a stage starts
    fn on_stage_start(&self, stage: Stage);

    /// Called when a stage ends; `detail` is a short human summary
    fn on_stage_complete(&self, stage: Stage, success: bool, detail: &str);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: Stage) {}
    fn on_stage_complete(&self, _stage: Stage, _success: bool, _detail: &str) {}
}
