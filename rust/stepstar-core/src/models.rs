use serde::{Deserialize, Serialize};

use crate::engine::SearchStats;

pub const REASON_NO_PATH: &str = "no-path";
pub const REASON_EXPANSION_LIMIT: &str = "expansion-limit";

/// Summary of a search run to completion by the driver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathResult<P> {
    /// Inclusive start-to-goal route, or `None` when not found.
    pub path: Option<Vec<P>>,
    /// Why `path` is `None`.
    pub reason: Option<String>,
    pub expanded: u64,
    pub enqueued: u64,
    /// Number of steps in `path`.
    pub cost: usize,
}

impl<P> PathResult<P> {
    pub(crate) fn found(path: Vec<P>, stats: SearchStats) -> Self {
        let cost = path.len().saturating_sub(1);
        Self { path: Some(path), reason: None, expanded: stats.expanded, enqueued: stats.enqueued, cost }
    }

    pub(crate) fn not_found(reason: &str, stats: SearchStats) -> Self {
        Self { path: None, reason: Some(reason.to_string()), expanded: stats.expanded, enqueued: stats.enqueued, cost: 0 }
    }

    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }
}
