use anyhow::Context;
use tracing_subscriber::{fmt, EnvFilter};

use stepstar_service::config::Config;
use stepstar_service::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).json().init();

    let cfg = Config::from_env()?;
    let state = AppState::from_config(&cfg)?;
    let app = build_router(state);
    let addr = cfg.addr()?;
    tracing::info!(core_version=%stepstar_core::version(), %addr, grid=?cfg.grid_path, "starting stepstar-service");
    let listener = tokio::net::TcpListener::bind(addr).await.with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
