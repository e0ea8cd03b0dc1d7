//! Distance estimates between positions.
//!
//! The engine only ever sees a [`Distance`]. Any `Fn(&P, &P) -> f64` works;
//! the grid helpers below cover the usual metrics for [`GridPos`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::graph::grid::GridPos;

pub trait Distance<P> {
    /// Non-negative estimate of the remaining cost from `from` to `to`.
    fn distance(&self, from: &P, to: &P) -> f64;
}

impl<P, F> Distance<P> for F
where
    F: Fn(&P, &P) -> f64,
{
    #[inline]
    fn distance(&self, from: &P, to: &P) -> f64 {
        self(from, to)
    }
}

#[inline]
pub fn manhattan(a: &GridPos, b: &GridPos) -> f64 {
    ((a.x - b.x).abs() + (a.y - b.y).abs()) as f64
}

#[inline]
pub fn chebyshev(a: &GridPos, b: &GridPos) -> f64 {
    (a.x - b.x).abs().max((a.y - b.y).abs()) as f64
}

pub fn octile(a: &GridPos, b: &GridPos) -> f64 {
    let dx = (a.x - b.x).abs() as f64;
    let dy = (a.y - b.y).abs() as f64;
    let dmin = dx.min(dy);
    let dmax = dx.max(dy);
    dmin * std::f64::consts::SQRT_2 + (dmax - dmin)
}

pub fn euclidean(a: &GridPos, b: &GridPos) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Named grid metric, selectable from configuration.
///
/// With unit step cost, `chebyshev` is the admissible choice for 8-way
/// movement and `manhattan` for 4-way. `zero` turns the search into
/// breadth-first expansion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    Manhattan,
    #[default]
    Chebyshev,
    Octile,
    Euclidean,
    Zero,
}

impl Distance<GridPos> for Heuristic {
    fn distance(&self, from: &GridPos, to: &GridPos) -> f64 {
        match self {
            Heuristic::Manhattan => manhattan(from, to),
            Heuristic::Chebyshev => chebyshev(from, to),
            Heuristic::Octile => octile(from, to),
            Heuristic::Euclidean => euclidean(from, to),
            Heuristic::Zero => 0.0,
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Chebyshev => "chebyshev",
            Heuristic::Octile => "octile",
            Heuristic::Euclidean => "euclidean",
            Heuristic::Zero => "zero",
        };
        f.write_str(name)
    }
}

impl FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Heuristic::Manhattan),
            "chebyshev" => Ok(Heuristic::Chebyshev),
            "octile" => Ok(Heuristic::Octile),
            "euclidean" => Ok(Heuristic::Euclidean),
            "zero" | "none" => Ok(Heuristic::Zero),
            other => Err(format!("unknown heuristic '{other}'")),
        }
    }
}
