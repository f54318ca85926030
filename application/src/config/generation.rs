//! Effective settings for one ticket run.

use bilet_domain::{ImageLayout, RepetitionPolicy, SheetHeader};

/// Default number of tickets per run
pub const DEFAULT_TICKET_COUNT: usize = 20;

/// Settings after config files and command-line flags are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Number of tickets to generate.
    pub count: usize,
    /// Whether questions may repeat across tickets.
    pub policy: RepetitionPolicy,
    /// Fixed seed for reproducible shuffles; `None` draws from entropy.
    pub seed: Option<u64>,
    /// Image placement bounds.
    pub layout: ImageLayout,
    /// Header printed on every ticket.
    pub sheet: SheetHeader,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_TICKET_COUNT,
            policy: RepetitionPolicy::default(),
            seed: None,
            layout: ImageLayout::default(),
            sheet: SheetHeader::default(),
        }
    }
}

impl GenerationConfig {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_policy(mut self, policy: RepetitionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_layout(mut self, layout: ImageLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_sheet(mut self, sheet: SheetHeader) -> Self {
        self.sheet = sheet;
        self
    }
}
