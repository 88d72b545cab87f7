//! Configuration management

use crate::error::{Result, TagtrailError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const STATE_DIR: &str = ".tagtrail";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// The entity these tags belong to (a note, a photo, a directory name)
    pub owner: String,
    /// Record a version after every mutating command
    #[serde(default)]
    pub auto_checkpoint: bool,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new(owner: String) -> Self {
        Config {
            owner,
            auto_checkpoint: false,
            created: Utc::now(),
        }
    }

    /// Load config from .tagtrail/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(STATE_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TagtrailError::NotTagtrailDirectory(path.to_path_buf())
            } else {
                TagtrailError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| TagtrailError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .tagtrail/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let state_dir = path.join(STATE_DIR);
        let config_path = state_dir.join(CONFIG_FILE);

        // Ensure .tagtrail directory exists
        if !state_dir.exists() {
            fs::create_dir(&state_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| TagtrailError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Default owner name: the directory's own name
    pub fn default_owner(path: &Path) -> String {
        path.canonicalize()
            .ok()
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| "untitled".to_string())
    }
}
