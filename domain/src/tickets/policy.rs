//! Repetition policy for ticket assembly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How questions may recur across the tickets of one run.
///
/// - **WrapAllowed** (default): a block that runs out of questions starts
///   over from the top of its shuffled order.
/// - **StrictNoRepeat**: no question appears twice; every block must hold
///   at least as many questions as tickets requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepetitionPolicy {
    #[default]
    WrapAllowed,
    StrictNoRepeat,
}

impl RepetitionPolicy {
    /// Map the boolean `strict_no_repeat` setting to a policy
    pub fn from_strict_flag(strict: bool) -> Self {
        if strict {
            RepetitionPolicy::StrictNoRepeat
        } else {
            RepetitionPolicy::WrapAllowed
        }
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, RepetitionPolicy::StrictNoRepeat)
    }
}

impl fmt::Display for RepetitionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepetitionPolicy::WrapAllowed => write!(f, "wrap-allowed"),
            RepetitionPolicy::StrictNoRepeat => write!(f, "strict-no-repeat"),
        }
    }
}

impl std::str::FromStr for RepetitionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wrap" | "wrap-allowed" | "wrap_allowed" => Ok(RepetitionPolicy::WrapAllowed),
            "strict" | "strict-no-repeat" | "strict_no_repeat" => {
                Ok(RepetitionPolicy::StrictNoRepeat)
            }
            _ => Err(format!("Invalid RepetitionPolicy: {}", s)),
        }
    }
}
