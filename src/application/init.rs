//! Initialize tagtrail use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, TagRepository};
use std::fs;
use std::path::Path;

/// Initialize tag tracking at the specified path.
///
/// The owner defaults to the directory name.
pub fn init(path: &Path, owner: Option<String>) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let owner = owner.unwrap_or_else(|| Config::default_owner(path));
    let config = Config::new(owner);
    repo.save_config(&config)?;

    tracing::info!(path = %path.display(), owner = %config.owner, "initialized tagtrail");
    Ok(config)
}
