use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::snapshot::SNAPSHOT_FILENAME;

const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Client configuration loaded from environment variables.
/// Command-line flags override these values.
#[derive(Debug, Clone)]
pub struct Config {
    /// Explicit snapshot location from `RESUME_STATE_PATH`.
    pub state_path: Option<PathBuf>,
    pub api_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            state_path: std::env::var("RESUME_STATE_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            api_url: std::env::var("RESUME_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()),
        })
    }

    /// Snapshot location, falling back to the platform data directory.
    pub fn resolve_state_path(&self) -> Result<PathBuf> {
        match &self.state_path {
            Some(path) => Ok(path.clone()),
            None => default_state_path(),
        }
    }
}

fn default_state_path() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Failed to get platform data directory")?;
    Ok(base.join("resume-builder").join(SNAPSHOT_FILENAME))
}
