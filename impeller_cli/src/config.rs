//! CLI settings stored in `impeller.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default settings file, relative to the working directory
pub const CONFIG_FILE: &str = "impeller.toml";

/// Front-end settings. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the design history log lives
    pub history_path: PathBuf,
    /// Material used when `--material` is not given
    pub default_material: String,
    /// Blade type used when `--blade-type` is not given
    pub default_blade_type: String,
    /// Print JSON results even without `--json`
    pub json_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_path: PathBuf::from("impeller_history.json"),
            default_material: "Steel".to_string(),
            default_blade_type: "Backward".to_string(),
            json_output: false,
        }
    }
}

/// Errors loading or saving the settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

fn io_error(path: &Path, source: std::io::Error) -> ConfigError {
    ConfigError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Load the settings file, or write and return defaults if it does not exist.
///
/// Failing to write the defaults is only a warning; the in-memory defaults
/// are still returned.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
        Ok(toml::from_str(&content)?)
    } else {
        let cfg = Config::default();
        if let Err(e) = save(&cfg, path) {
            eprintln!("Warning: using default settings, {}", e);
        }
        Ok(cfg)
    }
}

/// Write the settings file.
pub fn save(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content).map_err(|e| io_error(path, e))
}
