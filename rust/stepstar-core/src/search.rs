//! Blocking driver: plays the caller role for a [`NeighborProvider`].

use std::hash::Hash;

use tracing::debug;

use crate::engine::Engine;
use crate::error::SearchResult;
use crate::graph::provider::NeighborProvider;
use crate::heuristics::Distance;
use crate::models::{PathResult, REASON_EXPANSION_LIMIT, REASON_NO_PATH};
use crate::options::SearchOptions;
use crate::outcome::Outcome;

/// Run a whole search, answering every neighbor request from `provider`.
///
/// Stops early with reason `expansion-limit` once `options.max_expansions`
/// paths were expanded; the engine is left mid-search in that case.
pub fn find_path<P, D, N>(
    engine: &mut Engine<P, D>,
    provider: &N,
    start: P,
    goal: P,
    options: &SearchOptions,
) -> SearchResult<PathResult<P>>
where
    P: Clone + Eq + Hash,
    D: Distance<P>,
    N: NeighborProvider<P> + ?Sized,
{
    let mut outcome = engine.begin(start, goal)?;
    loop {
        outcome = match outcome {
            Outcome::Request(pos) => {
                if engine.stats().expanded >= options.max_expansions {
                    debug!(max_expansions = options.max_expansions, "expansion limit reached");
                    return Ok(PathResult::not_found(REASON_EXPANSION_LIMIT, engine.stats()));
                }
                let neighbors = provider.neighbors(&pos);
                engine.advance(neighbors)?
            }
            Outcome::Done(path) => {
                return Ok(PathResult::found(path.into_positions(), engine.stats()));
            }
            Outcome::NoPath => {
                return Ok(PathResult::not_found(REASON_NO_PATH, engine.stats()));
            }
        };
    }
}
