use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use stepstar_core::options::DEFAULT_MAX_EXPANSIONS;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Grid file served when a request carries no inline grid.
    pub grid_path: Option<PathBuf>,
    /// Upper bound on any request's `max_expansions`; always set.
    pub max_expansions: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("STEPSTAR_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match lookup("STEPSTAR_PORT") {
            Some(s) => s.parse::<u16>().with_context(|| format!("STEPSTAR_PORT={s}"))?,
            None => 8080,
        };
        let grid_path = lookup("STEPSTAR_GRID").filter(|s| !s.is_empty()).map(PathBuf::from);
        let max_expansions = lookup("STEPSTAR_MAX_EXPANSIONS")
            .map(|s| s.parse::<u64>().with_context(|| format!("STEPSTAR_MAX_EXPANSIONS={s}")))
            .transpose()?
            .unwrap_or(DEFAULT_MAX_EXPANSIONS);

        Ok(Self { host, port, grid_path, max_expansions })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}
