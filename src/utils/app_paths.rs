use anyhow::{anyhow, Result};
use std::fs;
use std::path::PathBuf;

const APP_NAME: &str = "delim-edit";

pub struct AppPaths;

impl AppPaths {
    /// Per-user directory for log files, created on demand
    pub fn log_dir() -> Result<PathBuf> {
        let log_dir = dirs::data_local_dir()
            .ok_or_else(|| anyhow!("Cannot determine local data directory"))?
            .join(APP_NAME)
            .join("logs");

        fs::create_dir_all(&log_dir)?;
        Ok(log_dir)
    }
}
