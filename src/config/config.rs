use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub keybindings: KeybindingConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show the selection/scroll readout on the status bar
    pub show_debug: bool,

    /// Color of the selected cell on the pinned title row
    /// (e.g. "red", "yellow", "cyan")
    pub title_highlight: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingConfig {
    /// Whether h/j/k/l move the selection
    pub vim_mode: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive for the log file, e.g. "info" or "delim_edit=debug".
    /// DELIM_EDIT_LOG overrides it.
    pub level: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_debug: false,
            title_highlight: "red".to_string(),
        }
    }
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self { vim_mode: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load config from the default location
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            // Create default config if it doesn't exist
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load config from `path`. A file that does not parse is reported and
    /// replaced by the defaults rather than stopping the editor.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;

        match toml::from_str(&contents) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("Ignoring invalid config {}: {}", path.display(), e);
                Ok(Self::default())
            }
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;

        Ok(())
    }

    /// Get the default config file path
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("delim-edit").join("config.toml"))
    }

    /// Create a default config file with comments
    pub fn create_default_with_comments() -> String {
        r#"# delim-edit configuration file
# Location: ~/.config/delim-edit/config.toml (Linux)
#           ~/Library/Application Support/delim-edit/config.toml (macOS)
#           %APPDATA%\delim-edit\config.toml (Windows)

[display]
# Show "xsel ysel xoffset yoffset width" on the status bar (F5 toggles it)
show_debug = false

# Color of the selected cell while it is on the pinned title row
# "red", "yellow", "green", "blue", "magenta", "cyan", "white"
title_highlight = "red"

[keybindings]
# Move with h/j/k/l as well as the arrow keys and C-b/C-f/C-p/C-n
vim_mode = true

[logging]
# Log filter for the log file; DELIM_EDIT_LOG overrides it
level = "info"
"#
        .to_string()
    }
}
