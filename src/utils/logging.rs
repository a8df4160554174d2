use anyhow::{anyhow, Context, Result};
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::utils::app_paths::AppPaths;

/// Environment variable that overrides the configured log filter
pub const LOG_ENV_VAR: &str = "DELIM_EDIT_LOG";

/// Create a timestamped log file in `log_dir` and point `latest.log` at it
pub fn create_log_file(log_dir: &Path) -> Result<(File, PathBuf)> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create {}", log_dir.display()))?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = log_dir.join(format!("delim-edit_{}.log", timestamp));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open {}", log_path.display()))?;

    #[cfg(unix)]
    {
        let latest_path = log_dir.join("latest.log");
        let _ = std::fs::remove_file(&latest_path); // Remove old symlink
        let _ = std::os::unix::fs::symlink(&log_path, &latest_path);
    }

    Ok((file, log_path))
}

/// Filter from DELIM_EDIT_LOG, else `default_level`, else "info"
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize tracing to a log file. The terminal belongs to the editor,
/// so nothing is written to stdout or stderr.
///
/// Returns the path of the log file.
pub fn init_tracing(default_level: &str) -> Result<PathBuf> {
    let (file, log_path) = create_log_file(&AppPaths::log_dir()?)?;

    let fmt_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .compact();

    tracing_subscriber::registry()
        .with(build_filter(default_level))
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    tracing::info!(target: "startup", "Logging to {}", log_path.display());
    Ok(log_path)
}
