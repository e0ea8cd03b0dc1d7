use super::grid::{Grid, GridPos};

/// Source of neighbor lists for the blocking driver.
///
/// The engine never calls this; [`find_path`](crate::search::find_path)
/// does, on the engine's behalf, whenever it is asked for neighbors.
pub trait NeighborProvider<P> {
    fn neighbors(&self, pos: &P) -> Vec<P>;
}

impl NeighborProvider<GridPos> for Grid {
    fn neighbors(&self, pos: &GridPos) -> Vec<GridPos> {
        Grid::neighbors(self, *pos)
    }
}
