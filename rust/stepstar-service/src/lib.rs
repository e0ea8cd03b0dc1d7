use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use arc_swap::ArcSwap;
use stepstar_core::Grid;
use tracing::info;

pub mod config;
pub mod errors;
pub mod routes;

pub use errors::AppError;
pub use routes::build_router;

/// The default grid, swapped atomically on reload.
#[derive(Clone, Debug)]
pub struct GridState {
    pub path: Option<PathBuf>,
    pub grid: Option<Arc<Grid>>, // None when no grid file is configured
    pub loaded_at_unix: u64,
}

impl GridState {
    pub fn load(path: Option<PathBuf>) -> anyhow::Result<Self> {
        let grid = match &path {
            Some(p) => {
                let grid = Grid::load(p).map_err(|e| anyhow::anyhow!("loading {}: {e}", p.display()))?;
                info!(path=%p.display(), width=grid.width(), height=grid.height(), obstacles=grid.obstacle_count(), "grid loaded");
                Some(Arc::new(grid))
            }
            None => None,
        };
        Ok(Self { path, grid, loaded_at_unix: now_unix() })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub current: Arc<ArcSwap<GridState>>, // atomic swap
    pub max_expansions: Option<u64>,
}

impl AppState {
    pub fn new(grid: GridState, max_expansions: Option<u64>) -> Self {
        Self { current: Arc::new(ArcSwap::from_pointee(grid)), max_expansions }
    }

    pub fn from_config(cfg: &config::Config) -> anyhow::Result<Self> {
        Ok(Self::new(GridState::load(cfg.grid_path.clone())?, Some(cfg.max_expansions)))
    }

    /// Re-read the configured grid file and swap it in.
    pub fn reload(&self) -> Result<Arc<GridState>, AppError> {
        let path = self.current.load().path.clone();
        let Some(path) = path else {
            return Err(AppError::BadRequest("no grid file configured".into()));
        };
        let next = Arc::new(GridState::load(Some(path))?);
        self.current.store(Arc::clone(&next));
        Ok(next)
    }
}

pub fn now_unix() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs()
}
