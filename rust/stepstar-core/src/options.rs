use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_EXPANSIONS: u64 = 1_000_000;

/// Limits applied by the blocking driver. The engine itself is unbounded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Stop with reason `expansion-limit` once this many paths were expanded.
    pub max_expansions: u64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { max_expansions: DEFAULT_MAX_EXPANSIONS }
    }
}

impl SearchOptions {
    pub fn with_max_expansions(max_expansions: u64) -> Self {
        Self { max_expansions }
    }

    /// Lower `max_expansions` to `cap` when it is higher.
    pub fn capped(mut self, cap: Option<u64>) -> Self {
        if let Some(cap) = cap {
            self.max_expansions = self.max_expansions.min(cap);
        }
        self
    }
}
