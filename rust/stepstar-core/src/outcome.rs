use serde::{Deserialize, Serialize};

use crate::path::Path;

/// Result of one [`Engine::advance`](crate::Engine::advance) call.
///
/// Keep calling `advance` only while the outcome is [`Outcome::Request`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Outcome<P> {
    /// Resume by supplying the neighbors of this position.
    Request(P),
    /// The goal was reached; the inclusive start-to-end route.
    Done(Path<P>),
    /// Frontier exhausted without reaching the goal.
    NoPath,
}

impl<P> Outcome<P> {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Request(_))
    }

    /// Position whose neighbors are wanted, if the search is still running.
    pub fn requested(&self) -> Option<&P> {
        match self {
            Outcome::Request(p) => Some(p),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<Path<P>> {
        match self {
            Outcome::Done(path) => Some(path),
            _ => None,
        }
    }
}
