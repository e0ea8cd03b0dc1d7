//! Candidate routes carried inside the frontier.

use serde::{Deserialize, Serialize};

use crate::error::{SearchError, SearchResult};

/// An ordered route from the search start toward a frontier tip.
///
/// While the search runs, `steps` holds every position before `current`
/// and never `current` itself. Once the route reaches the goal it is
/// finalized: `current` is appended, the goal is appended, and `current`
/// becomes the goal, so `steps` is the inclusive start-to-end sequence.
///
/// Cost-so-far is the number of steps taken (unit edges).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PathRepr<P>")]
pub struct Path<P> {
    steps: Vec<P>,
    current: P,
    complete: bool,
}

// Wire shape of `Path`, checked before it becomes one.
#[derive(Deserialize)]
struct PathRepr<P> {
    steps: Vec<P>,
    current: P,
    complete: bool,
}

impl<P> TryFrom<PathRepr<P>> for Path<P> {
    type Error = String;

    fn try_from(raw: PathRepr<P>) -> Result<Self, Self::Error> {
        // a finished route holds at least the last tip and the goal
        if raw.complete && raw.steps.len() < 2 {
            return Err(format!("complete path needs at least 2 steps, got {}", raw.steps.len()));
        }
        Ok(Path { steps: raw.steps, current: raw.current, complete: raw.complete })
    }
}

impl<P: Clone> Path<P> {
    /// Zero-length path sitting at `start`.
    pub fn new(start: P) -> Self {
        Self { steps: Vec::new(), current: start, complete: false }
    }

    pub fn current(&self) -> &P {
        &self.current
    }

    /// Positions behind the tip; the full route once [`is_complete`](Self::is_complete).
    pub fn steps(&self) -> &[P] {
        &self.steps
    }

    /// Edges walked from the start to the tip.
    pub fn cost(&self) -> usize {
        if self.complete {
            self.steps.len().saturating_sub(1)
        } else {
            self.steps.len()
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Independent copy of this path extended by one step to `next`.
    pub fn successor(&self, next: P) -> SearchResult<Path<P>> {
        let want = self.steps.len() + 1;
        let mut steps = Vec::new();
        steps.try_reserve_exact(want).map_err(SearchError::alloc("path", want))?;
        steps.extend_from_slice(&self.steps);
        steps.push(self.current.clone());
        Ok(Path { steps, current: next, complete: false })
    }

    /// Close the route at `end`.
    pub fn finish(mut self, end: P) -> SearchResult<Path<P>> {
        self.steps.try_reserve(2).map_err(SearchError::alloc("path", 2))?;
        let tip = std::mem::replace(&mut self.current, end);
        self.steps.push(tip);
        self.steps.push(self.current.clone());
        self.complete = true;
        Ok(self)
    }

    /// Every position on the route, tip included.
    pub fn into_positions(self) -> Vec<P> {
        let mut steps = self.steps;
        if !self.complete {
            steps.push(self.current);
        }
        steps
    }
}
