//! Checkpoint and history use cases

use crate::domain::Snapshot;
use crate::error::{Result, TagtrailError};
use crate::infrastructure::{FileSystemRepository, TagRepository};
use std::collections::BTreeMap;

/// Service for recording and reading tag versions
pub struct HistoryService {
    repository: FileSystemRepository,
}

impl HistoryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        HistoryService { repository }
    }

    /// Record the current tags if they differ from the latest version.
    /// Returns the new version number, or `None` if nothing changed.
    pub fn checkpoint(&self) -> Result<Option<usize>> {
        let mut manager = self.repository.load_manager()?;

        let version = manager.checkpoint();
        if version.is_some() {
            self.repository.save_manager(&manager)?;
        }

        Ok(version)
    }

    pub fn versions(&self) -> Result<BTreeMap<usize, Snapshot>> {
        Ok(self.repository.load_manager()?.versions())
    }

    pub fn version(&self, key: usize) -> Result<Snapshot> {
        self.repository
            .load_manager()?
            .history()
            .get(key)
            .cloned()
            .ok_or(TagtrailError::VersionNotFound(key))
    }
}
