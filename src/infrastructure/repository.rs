//! File system repository

use crate::domain::{KnownLabels, TagManager};
use crate::error::{Result, TagtrailError};
use crate::infrastructure::config::STATE_DIR;
use crate::infrastructure::Config;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const TAGS_FILE: &str = "tags.toml";
const REGISTRY_FILE: &str = "registry.toml";

/// Abstract repository for tag state
pub trait TagRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .tagtrail/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .tagtrail/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .tagtrail directory exists
    fn is_initialized(&self) -> bool;

    /// Create .tagtrail directory structure
    fn initialize(&self) -> Result<()>;

    /// Load the tag manager; a missing file is an empty manager
    fn load_manager(&self) -> Result<TagManager>;

    fn save_manager(&self, manager: &TagManager) -> Result<()>;

    /// Load the known-label registry; a missing file is an empty registry
    fn load_registry(&self) -> Result<KnownLabels>;

    fn save_registry(&self, registry: &KnownLabels) -> Result<()>;
}

/// File system implementation of TagRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the tagtrail root by walking up from current directory
    /// First checks TAGTRAIL_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("TAGTRAIL_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_state_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(TagtrailError::Config(format!(
                    "TAGTRAIL_ROOT is set to '{}' but no .tagtrail directory found. \
                    Run 'tagtrail init' in that directory or unset TAGTRAIL_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the tagtrail root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_state_dir(&current) {
                tracing::debug!(root = %current.display(), "discovered tagtrail root");
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(TagtrailError::NotTagtrailDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_state_dir(path: &Path) -> bool {
        path.join(STATE_DIR).is_dir()
    }

    fn state_path(&self, file: &str) -> PathBuf {
        self.root.join(STATE_DIR).join(file)
    }

    fn read_state<T>(&self, file: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.state_path(file);

        if !path.exists() {
            return Ok(T::default());
        }

        let contents = fs::read_to_string(&path)?;
        toml::from_str(&contents)
            .map_err(|e| TagtrailError::State(format!("{}: {}", path.display(), e.message())))
    }

    fn write_state<T: Serialize>(&self, file: &str, value: &T) -> Result<()> {
        let contents = toml::to_string_pretty(value)?;
        self.write_atomic(&self.state_path(file), &contents)?;
        tracing::info!(file, "saved state");
        Ok(())
    }

    /// Write content using a best-effort atomic replace:
    /// write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    fn write_atomic(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.tagtrail-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("state.toml"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

impl TagRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_state_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let state_dir = self.root.join(STATE_DIR);

        if state_dir.exists() {
            return Err(TagtrailError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&state_dir)?;
        Ok(())
    }

    fn load_manager(&self) -> Result<TagManager> {
        self.read_state(TAGS_FILE)
    }

    fn save_manager(&self, manager: &TagManager) -> Result<()> {
        self.write_state(TAGS_FILE, manager)
    }

    fn load_registry(&self) -> Result<KnownLabels> {
        self.read_state(REGISTRY_FILE)
    }

    fn save_registry(&self, registry: &KnownLabels) -> Result<()> {
        self.write_state(REGISTRY_FILE, registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Label, LabelRegistry};
    use tempfile::TempDir;

    fn initialized_repo(temp: &TempDir) -> FileSystemRepository {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo
    }

    #[test]
    fn test_initialize_creates_state_dir() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());
        repo.initialize().unwrap();
        assert!(repo.is_initialized());
        assert!(temp.path().join(".tagtrail").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = initialized_repo(&temp);

        let result = repo.initialize();
        assert!(matches!(result, Err(TagtrailError::Config(_))));
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        initialized_repo(&temp);
        let nested = temp.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();

        let repo = FileSystemRepository::discover_from(&nested).unwrap();
        assert_eq!(repo.root(), temp.path());
    }

    #[test]
    fn test_discover_from_outside_fails() {
        let temp = TempDir::new().unwrap();

        let result = FileSystemRepository::discover_from(temp.path());
        assert!(matches!(
            result,
            Err(TagtrailError::NotTagtrailDirectory(_))
        ));
    }

    #[test]
    fn test_missing_state_files_load_empty() {
        let temp = TempDir::new().unwrap();
        let repo = initialized_repo(&temp);

        assert_eq!(repo.load_manager().unwrap(), TagManager::new());
        assert!(repo.load_registry().unwrap().is_empty());
    }

    #[test]
    fn test_manager_and_registry_round_trip() {
        let temp = TempDir::new().unwrap();
        let repo = initialized_repo(&temp);
        let mut registry = KnownLabels::new();
        let mut manager = TagManager::new();
        manager.add_tag("work", &mut registry);
        manager.checkpoint();
        manager.delete_tag("work");
        manager.checkpoint();

        repo.save_manager(&manager).unwrap();
        repo.save_registry(&registry).unwrap();

        assert_eq!(repo.load_manager().unwrap(), manager);
        assert_eq!(repo.load_registry().unwrap(), registry);
        assert!(!temp
            .path()
            .join(".tagtrail")
            .read_dir()
            .unwrap()
            .any(|e| e.unwrap().file_name().to_string_lossy().contains("tmp")));
    }

    #[test]
    fn test_save_overwrites_previous_state() {
        let temp = TempDir::new().unwrap();
        let repo = initialized_repo(&temp);
        let mut registry = KnownLabels::new();

        registry.register_if_absent(&Label::new("a").unwrap());
        repo.save_registry(&registry).unwrap();
        registry.register_if_absent(&Label::new("b").unwrap());
        repo.save_registry(&registry).unwrap();

        assert_eq!(repo.load_registry().unwrap().len(), 2);
    }

    #[test]
    fn test_corrupt_history_is_state_error() {
        let temp = TempDir::new().unwrap();
        let repo = initialized_repo(&temp);
        fs::write(
            temp.path().join(".tagtrail/tags.toml"),
            "tags = []\nhistory = [[]]\n",
        )
        .unwrap();

        let result = repo.load_manager();
        match result {
            Err(TagtrailError::State(msg)) => assert!(msg.contains("Version 0 cannot be empty")),
            other => panic!("Expected State error, got {:?}", other),
        }
    }
}
