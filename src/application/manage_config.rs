//! Config management use case

use crate::error::{Result, TagtrailError};
use crate::infrastructure::{Config, FileSystemRepository, TagRepository};

/// Service for managing tagtrail configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "owner" => Ok(config.owner.clone()),
            "auto_checkpoint" => Ok(config.auto_checkpoint.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(TagtrailError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: owner, auto_checkpoint, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "owner" => {
                if value.is_empty() {
                    return Err(TagtrailError::Config("Owner cannot be empty".to_string()));
                }
                config.owner = value.to_string();
            }
            "auto_checkpoint" => {
                config.auto_checkpoint = parse_bool(value)?;
            }
            "created" => {
                return Err(TagtrailError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(TagtrailError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: owner, auto_checkpoint",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(TagtrailError::Config(format!(
            "Invalid boolean: '{}'. Use true or false",
            value
        ))),
    }
}
