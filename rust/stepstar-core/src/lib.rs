//! Caller-driven A* search.
//!
//! The [`Engine`] holds the frontier and visited set but never enumerates a
//! map. Each call tells the caller which position it needs neighbors for;
//! the caller answers with whatever neighbor list its own topology rules
//! produce. [`search::find_path`] runs that loop for any
//! [`NeighborProvider`], and [`graph::Grid`] is a ready-made bounded grid
//! with obstacles.

pub mod engine;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod heuristics;
pub mod models;
pub mod options;
pub mod outcome;
pub mod path;
pub mod search;
pub mod visited;

pub use engine::{Engine, Phase, SearchStats};
pub use error::{SearchError, SearchResult};
pub use graph::{Grid, GridError, GridPos, GridSpec, MovementMode, NeighborProvider};
pub use heuristics::{Distance, Heuristic};
pub use models::PathResult;
pub use options::SearchOptions;
pub use outcome::Outcome;
pub use path::Path;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
