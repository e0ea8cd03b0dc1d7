//! Bounded 2D grid with obstacles.
//!
//! A ready-made caller for the engine: it answers neighbor requests by
//! stepping in every allowed direction and dropping cells that are out of
//! bounds or blocked.

use std::fmt;
use std::path::Path as FsPath;
use std::str::FromStr;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::movement::MovementMode;

/// A grid cell. Serialized as `[x, y]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for GridPos {
    fn from(v: [i32; 2]) -> Self {
        GridPos { x: v[0], y: v[1] }
    }
}

impl From<GridPos> for [i32; 2] {
    fn from(p: GridPos) -> Self {
        [p.x, p.y]
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((x, y): (i32, i32)) -> Self {
        GridPos { x, y }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl FromStr for GridPos {
    type Err = GridError;

    /// Parses `x,y`, optionally wrapped in parentheses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let mut parts = inner.split(',').map(str::trim);
        let bad = || GridError::Parse(format!("expected 'x,y', got '{s}'"));
        let x = parts.next().and_then(|v| v.parse::<i32>().ok()).ok_or_else(bad)?;
        let y = parts.next().and_then(|v| v.parse::<i32>().ok()).ok_or_else(bad)?;
        if parts.next().is_some() {
            return Err(bad());
        }
        Ok(GridPos { x, y })
    }
}

#[derive(Error, Debug)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    Dimensions { width: i32, height: i32 },
    #[error("obstacle {pos} lies outside the {width}x{height} grid")]
    OutOfBounds { pos: GridPos, width: i32, height: i32 },
    #[error("rows must all have the same width (row {row} has {found}, expected {expected})")]
    RaggedRows { row: usize, found: usize, expected: usize },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid grid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serializable grid description.
///
/// Either give `width`/`height` plus `obstacles`, or give `rows` where
/// `#` marks an obstacle (row index is `y`). Obstacles listed explicitly
/// are added on top of those drawn in `rows`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub rows: Option<Vec<String>>,
    pub obstacles: Vec<GridPos>,
    pub movement: MovementMode,
}

#[derive(Clone, Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    blocked: FxHashSet<GridPos>,
    movement: MovementMode,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::Dimensions { width, height });
        }
        Ok(Self { width, height, blocked: FxHashSet::default(), movement: MovementMode::default() })
    }

    pub fn with_movement(mut self, movement: MovementMode) -> Self {
        self.movement = movement;
        self
    }

    pub fn block(&mut self, pos: GridPos) -> Result<(), GridError> {
        if !self.in_bounds(pos) {
            return Err(GridError::OutOfBounds { pos, width: self.width, height: self.height });
        }
        self.blocked.insert(pos);
        Ok(())
    }

    /// Parse an ASCII drawing; `#` is an obstacle, anything else is open.
    pub fn from_ascii(text: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = text.lines().map(str::trim_end).filter(|l| !l.is_empty()).collect();
        Self::from_rows(&rows)
    }

    fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let expected = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        let mut grid = Grid::new(expected as i32, rows.len() as i32)?;
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != expected {
                return Err(GridError::RaggedRows { row: y, found, expected });
            }
            for (x, c) in row.chars().enumerate() {
                if c == '#' {
                    grid.blocked.insert(GridPos::new(x as i32, y as i32));
                }
            }
        }
        Ok(grid)
    }

    pub fn from_spec(spec: &GridSpec) -> Result<Self, GridError> {
        let mut grid = match (&spec.rows, spec.width, spec.height) {
            (Some(rows), _, _) => Self::from_rows(rows)?,
            (None, Some(w), Some(h)) => Grid::new(w, h)?,
            _ => return Err(GridError::Parse("grid needs either rows or width and height".into())),
        };
        for &pos in &spec.obstacles {
            grid.block(pos)?;
        }
        Ok(grid.with_movement(spec.movement))
    }

    pub fn from_json_str(s: &str) -> Result<Self, GridError> {
        let spec: GridSpec = serde_json::from_str(s)?;
        Self::from_spec(&spec)
    }

    /// Load a grid file: JSON ([`GridSpec`]) when the content starts with
    /// `{`, otherwise an ASCII drawing.
    pub fn load(path: &FsPath) -> Result<Self, GridError> {
        let text = std::fs::read_to_string(path)?;
        if text.trim_start().starts_with('{') {
            Self::from_json_str(&text)
        } else {
            Self::from_ascii(&text)
        }
    }

    pub fn to_spec(&self) -> GridSpec {
        let mut obstacles: Vec<GridPos> = self.blocked.iter().copied().collect();
        obstacles.sort();
        GridSpec {
            width: Some(self.width),
            height: Some(self.height),
            rows: None,
            obstacles,
            movement: self.movement,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn movement(&self) -> MovementMode {
        self.movement
    }

    pub fn obstacle_count(&self) -> usize {
        self.blocked.len()
    }

    #[inline]
    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    #[inline]
    pub fn is_blocked(&self, pos: GridPos) -> bool {
        self.blocked.contains(&pos)
    }

    #[inline]
    pub fn is_walkable(&self, pos: GridPos) -> bool {
        self.in_bounds(pos) && !self.is_blocked(pos)
    }

    /// Walkable cells one step from `pos`, in the fixed movement order.
    pub fn neighbors(&self, pos: GridPos) -> Vec<GridPos> {
        self.movement
            .moves()
            .iter()
            .map(|m| GridPos::new(pos.x + m.dx, pos.y + m.dy))
            .filter(|&p| self.is_walkable(p))
            .collect()
    }

    /// ASCII drawing with `S`/`G` at the route ends, `*` on the route.
    pub fn render_path(&self, path: &[GridPos]) -> String {
        let on_path: FxHashSet<GridPos> = path.iter().copied().collect();
        let mut out = String::with_capacity(render_capacity(self.width, self.height));
        for y in 0..self.height {
            for x in 0..self.width {
                let p = GridPos::new(x, y);
                let c = if path.first() == Some(&p) {
                    'S'
                } else if path.last() == Some(&p) {
                    'G'
                } else if on_path.contains(&p) {
                    '*'
                } else if self.is_blocked(p) {
                    '#'
                } else {
                    '.'
                };
                out.push(c);
            }
            out.push('\n');
        }
        out
    }
}

// Upper bound on the up-front reservation; larger drawings grow as they go.
const RENDER_PRESIZE_LIMIT: usize = 1 << 20;

/// Bytes for `height` rows of `width` cells plus a newline, in `usize`.
fn render_capacity(width: i32, height: i32) -> usize {
    let width = usize::try_from(width).unwrap_or(0);
    let height = usize::try_from(height).unwrap_or(0);
    width
        .checked_add(1)
        .and_then(|row| row.checked_mul(height))
        .map_or(RENDER_PRESIZE_LIMIT, |n| n.min(RENDER_PRESIZE_LIMIT))
}
