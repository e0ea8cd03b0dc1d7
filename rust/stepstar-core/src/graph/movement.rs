//! Grid step directions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Movement {
    pub dx: i32,
    pub dy: i32,
}

impl Movement {
    pub fn is_diagonal(&self) -> bool {
        self.dx != 0 && self.dy != 0
    }
}

pub const NORTH: Movement = Movement { dx: 0, dy: 1 };
pub const SOUTH: Movement = Movement { dx: 0, dy: -1 };
pub const EAST: Movement = Movement { dx: 1, dy: 0 };
pub const WEST: Movement = Movement { dx: -1, dy: 0 };
pub const NORTHEAST: Movement = Movement { dx: 1, dy: 1 };
pub const NORTHWEST: Movement = Movement { dx: -1, dy: 1 };
pub const SOUTHEAST: Movement = Movement { dx: 1, dy: -1 };
pub const SOUTHWEST: Movement = Movement { dx: -1, dy: -1 };

// Scan of the 3x3 neighborhood, dx outer and dy inner, both ascending.
// Neighbor order feeds frontier tie-breaking, so it is fixed.
pub const MOVEMENT_ORDER: [Movement; 8] = [
    SOUTHWEST, WEST, NORTHWEST, SOUTH, NORTH, SOUTHEAST, EAST, NORTHEAST,
];

// Same scan restricted to cardinals.
pub const CARDINAL_ORDER: [Movement; 4] = [WEST, SOUTH, NORTH, EAST];

/// Which steps a grid allows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementMode {
    /// North, south, east, west.
    Cardinal,
    /// Cardinals plus diagonals.
    #[default]
    Octile,
}

impl MovementMode {
    pub fn moves(&self) -> &'static [Movement] {
        match self {
            MovementMode::Cardinal => &CARDINAL_ORDER,
            MovementMode::Octile => &MOVEMENT_ORDER,
        }
    }
}

impl fmt::Display for MovementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovementMode::Cardinal => f.write_str("cardinal"),
            MovementMode::Octile => f.write_str("octile"),
        }
    }
}

impl FromStr for MovementMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cardinal" | "4" | "4dir" => Ok(MovementMode::Cardinal),
            "octile" | "8" | "8dir" => Ok(MovementMode::Octile),
            other => Err(format!("unknown movement mode '{other}'")),
        }
    }
}
