//! Run configuration loaded from a JSON file.
//!
//! ```json
//! {
//!     "bookmarks": "bookmarks.html",
//!     "csv_file_name": "playlist.csv",
//!     "xlsx_file_name": "playlist.xlsx",
//!     "chrome_path": "open -a /Applications/Google\\ Chrome.app %s"
//! }
//! ```
//!
//! Every key is optional. `db_path` is accepted for compatibility and unused.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use ytshuffle_core::file_type::{CONFIG_EXTENSIONS, check_file_type};

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    FileType(#[from] ytshuffle_core::Error),

    #[error("Configuration file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read configuration file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bookmarks export to read songs from
    pub bookmarks: PathBuf,
    /// CSV playlist to read from or write to
    pub csv_file_name: PathBuf,
    /// Spreadsheet playlist to read from or write to
    pub xlsx_file_name: PathBuf,
    /// Browser command template; the system opener is used when absent
    pub chrome_path: Option<String>,
    pub db_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bookmarks: PathBuf::from("default_bookmarks.html"),
            csv_file_name: PathBuf::from("write_playlist.csv"),
            xlsx_file_name: PathBuf::from("write_playlist.xlsx"),
            chrome_path: None,
            db_path: None,
        }
    }
}

impl Config {
    /// Load configuration from a `.json` file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        check_file_type(path, CONFIG_EXTENSIONS)?;

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let config = Self::from_json(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::info!("Loaded program configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Resolve the configuration for this run.
    ///
    /// An explicit path must exist. Otherwise `./config.json` is tried, then
    /// `<config dir>/ytshuffle/config.json`, then built-in defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        for candidate in Self::search_paths() {
            if candidate.is_file() {
                return Self::load(&candidate);
            }
        }

        tracing::info!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("ytshuffle").join(DEFAULT_CONFIG_FILE));
        }
        paths
    }
}
