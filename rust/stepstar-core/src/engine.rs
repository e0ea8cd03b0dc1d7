//! The resumable search state machine.
//!
//! The engine never looks up neighbors itself. [`Engine::begin`] and every
//! non-terminal [`Engine::advance`] return [`Outcome::Request`] naming the
//! position whose neighbors are needed next; the caller computes that list
//! however it likes and hands it to the following `advance`.
//!
//! ```
//! use stepstar_core::{Engine, Outcome};
//!
//! // positions on a line, neighbors are +-1
//! let mut engine = Engine::new(|a: &i32, b: &i32| (a - b).abs() as f64);
//! let mut outcome = engine.begin(0, 3).unwrap();
//! while let Outcome::Request(at) = outcome {
//!     outcome = engine.advance([at - 1, at + 1]).unwrap();
//! }
//! let path = outcome.into_path().unwrap();
//! assert_eq!(path.steps(), &[0, 1, 2, 3]);
//! ```

use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::{SearchError, SearchResult};
use crate::frontier::Frontier;
use crate::heuristics::Distance;
use crate::outcome::Outcome;
use crate::path::Path;
use crate::visited::VisitedSet;

/// Where the engine is in the begin/advance protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No search has been started since construction or [`Engine::reset`].
    Idle,
    /// Waiting for the neighbors of the last requested position.
    Searching,
    /// The last search returned `Done`, `NoPath`, or failed.
    Finished,
}

/// Counters for the current search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Paths popped from the frontier.
    pub expanded: u64,
    /// Successor paths pushed onto the frontier.
    pub enqueued: u64,
    /// Neighbors ignored because they were already visited.
    pub skipped: u64,
}

pub struct Engine<P, D> {
    distance: D,
    frontier: Frontier<P>,
    visited: VisitedSet<P>,
    start: Option<P>,
    end: Option<P>,
    phase: Phase,
    stats: SearchStats,
}

impl<P, D> Engine<P, D>
where
    P: Clone + Eq + Hash,
    D: Distance<P>,
{
    pub fn new(distance: D) -> Self {
        Self {
            distance,
            frontier: Frontier::new(),
            visited: VisitedSet::new(),
            start: None,
            end: None,
            phase: Phase::Idle,
            stats: SearchStats::default(),
        }
    }

    /// Start a new search, discarding any previous one.
    ///
    /// Always answers with `Request(start)`.
    pub fn begin(&mut self, start: P, end: P) -> SearchResult<Outcome<P>> {
        self.reset();
        let h0 = self.distance.distance(&start, &end);
        self.visited.insert(start.clone())?;
        self.frontier.push(Path::new(start.clone()), h0)?;
        self.start = Some(start.clone());
        self.end = Some(end);
        self.phase = Phase::Searching;
        debug!(h0, "search started");
        Ok(Outcome::Request(start))
    }

    /// Feed the neighbors of the most recently requested position.
    ///
    /// The list is not checked against the request; passing neighbors of
    /// some other position silently misdirects the search.
    pub fn advance<I>(&mut self, neighbors: I) -> SearchResult<Outcome<P>>
    where
        I: IntoIterator<Item = P>,
    {
        let end = match (self.phase, &self.end) {
            (Phase::Searching, Some(end)) => end.clone(),
            (Phase::Finished, _) => return Err(SearchError::Finished),
            _ => return Err(SearchError::NotStarted),
        };
        match self.expand(&end, neighbors) {
            Ok(outcome) => {
                if outcome.is_terminal() {
                    self.phase = Phase::Finished;
                }
                Ok(outcome)
            }
            Err(e) => {
                warn!(error = %e, expanded = self.stats.expanded, "search abandoned");
                self.phase = Phase::Finished;
                Err(e)
            }
        }
    }

    fn expand<I>(&mut self, end: &P, neighbors: I) -> SearchResult<Outcome<P>>
    where
        I: IntoIterator<Item = P>,
    {
        let Some(best) = self.frontier.pop() else {
            debug!(expanded = self.stats.expanded, "frontier exhausted");
            return Ok(Outcome::NoPath);
        };
        self.stats.expanded += 1;
        let g = best.cost() + 1;

        for n in neighbors {
            if n == *end {
                let path = best.finish(n)?;
                debug!(expanded = self.stats.expanded, cost = path.cost(), "goal reached");
                return Ok(Outcome::Done(path));
            }
            if self.visited.contains(&n) {
                self.stats.skipped += 1;
                continue;
            }
            self.visited.insert(n.clone())?;
            let f = g as f64 + self.distance.distance(&n, end);
            let next = best.successor(n)?;
            self.frontier.push(next, f)?;
            self.stats.enqueued += 1;
        }
        trace!(g, frontier = self.frontier.len(), visited = self.visited.len(), "expanded");
        drop(best);

        match self.frontier.peek() {
            Some(next) => Ok(Outcome::Request(next.current().clone())),
            None => {
                // Expansion added nothing and nothing else was queued.
                debug!(expanded = self.stats.expanded, "dead end after expansion");
                Ok(Outcome::NoPath)
            }
        }
    }

    /// Drop all search state and return to [`Phase::Idle`].
    pub fn reset(&mut self) {
        self.frontier.clear();
        self.visited.clear();
        self.start = None;
        self.end = None;
        self.phase = Phase::Idle;
        self.stats = SearchStats::default();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_searching(&self) -> bool {
        self.phase == Phase::Searching
    }

    pub fn start(&self) -> Option<&P> {
        self.start.as_ref()
    }

    pub fn end(&self) -> Option<&P> {
        self.end.as_ref()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_visited(&self, pos: &P) -> bool {
        self.visited.contains(pos)
    }
}
