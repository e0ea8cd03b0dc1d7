use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, info_span};

use stepstar_core::search::find_path;
use stepstar_core::{Engine, Grid, GridPos, GridSpec, Heuristic, MovementMode, PathResult, SearchOptions};

use crate::errors::AppError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct FindPathRequest {
    pub start: GridPos,
    pub goal: GridPos,
    /// Inline grid; the configured default grid is used when absent.
    pub grid: Option<GridSpec>,
    pub heuristic: Option<Heuristic>,
    /// Overrides the grid's own movement mode.
    pub movement: Option<MovementMode>,
    pub options: Option<SearchOptions>,
}

#[derive(Debug, Serialize)]
pub struct Healthz {
    pub status: &'static str,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/version", get(version))
        .route("/grid", get(grid_info))
        .route("/find_path", post(find_path_handler))
        .route("/admin/reload", post(reload))
        .with_state(state)
}

async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, Json(Healthz { status: "ok" }))
}

async fn version() -> impl IntoResponse {
    let svc_version = env!("CARGO_PKG_VERSION");
    let core_version = stepstar_core::version();
    (StatusCode::OK, Json(json!({"service_version": svc_version, "core_version": core_version})))
}

async fn grid_info(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let current = state.current.load();
    let grid = current.grid.as_ref().ok_or_else(|| AppError::NotFound("no default grid loaded".into()))?;
    Ok(Json(json!({
        "path": current.path,
        "loaded_at_unix": current.loaded_at_unix,
        "grid": grid.to_spec(),
    })))
}

async fn find_path_handler(
    State(state): State<AppState>,
    Json(req): Json<FindPathRequest>,
) -> Result<Json<PathResult<GridPos>>, AppError> {
    let span = info_span!("find_path", start = %req.start, goal = %req.goal, inline_grid = req.grid.is_some());

    let grid: Arc<Grid> = match &req.grid {
        Some(spec) => Arc::new(Grid::from_spec(spec).map_err(|e| AppError::BadRequest(e.to_string()))?),
        None => state
            .current
            .load()
            .grid
            .clone()
            .ok_or_else(|| AppError::BadRequest("request has no grid and no default grid is loaded".into()))?,
    };
    let grid = match req.movement {
        Some(mode) if mode != grid.movement() => Arc::new((*grid).clone().with_movement(mode)),
        _ => grid,
    };
    for (name, pos) in [("start", req.start), ("goal", req.goal)] {
        if !grid.in_bounds(pos) {
            return Err(AppError::BadRequest(format!(
                "{name} {pos} is outside the {}x{} grid",
                grid.width(),
                grid.height()
            )));
        }
    }

    let options = req.options.unwrap_or_default().capped(state.max_expansions);
    let heuristic = req.heuristic.unwrap_or_default();
    let (start, goal) = (req.start, req.goal);

    // The search is CPU bound; keep it off the async workers.
    let res = tokio::task::spawn_blocking(move || {
        let _enter = span.enter();
        let mut engine = Engine::new(heuristic);
        let res = find_path(&mut engine, grid.as_ref(), start, goal, &options)?;
        let path_len = res.path.as_ref().map(|p| p.len()).unwrap_or(0);
        info!(reason=?res.reason, expanded=res.expanded, path_len, cost=res.cost, %heuristic, max_expansions = options.max_expansions, "find_path done");
        Ok::<_, AppError>(res)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::Error::new(e).context("find_path task failed")))??;

    Ok(Json(res))
}

async fn reload(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let next = state.reload()?;
    let (width, height) = next.grid.as_ref().map(|g| (g.width(), g.height())).unwrap_or((0, 0));
    info!(width, height, "grid reloaded");
    Ok(Json(json!({"reloaded": true, "loaded_at_unix": next.loaded_at_unix, "width": width, "height": height})))
}
