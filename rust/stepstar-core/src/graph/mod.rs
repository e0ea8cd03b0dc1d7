pub mod grid;
pub mod movement;
pub mod provider;

pub use grid::{Grid, GridError, GridPos, GridSpec};
pub use movement::{Movement, MovementMode, CARDINAL_ORDER, MOVEMENT_ORDER};
pub use provider::NeighborProvider;
