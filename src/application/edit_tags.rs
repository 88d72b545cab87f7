//! Tag editing use cases

use crate::domain::{Label, TagManager};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, TagRepository};

/// Outcome of a mutating tag command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditReport {
    pub before: Vec<Label>,
    pub after: Vec<Label>,
    /// Version recorded by auto-checkpoint, if any
    pub version: Option<usize>,
}

impl EditReport {
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

/// Service for reading and editing the current tags
pub struct TagService {
    repository: FileSystemRepository,
}

impl TagService {
    pub fn new(repository: FileSystemRepository) -> Self {
        TagService { repository }
    }

    /// Add each name in order. Every non-empty name is registered as known.
    pub fn add(&self, names: &[String]) -> Result<EditReport> {
        let mut registry = self.repository.load_registry()?;

        let report = self.edit(|manager| {
            for name in names {
                manager.add_tag(name, &mut registry);
            }
        })?;

        self.repository.save_registry(&registry)?;
        Ok(report)
    }

    pub fn delete(&self, names: &[String]) -> Result<EditReport> {
        self.edit(|manager| {
            for name in names {
                manager.delete_tag(name);
            }
        })
    }

    /// Replace all tags. Empty names are skipped.
    pub fn set(&self, names: &[String]) -> Result<EditReport> {
        let labels: Vec<Label> = names.iter().filter_map(|name| Label::new(name)).collect();
        self.edit(|manager| manager.set_tags(labels))
    }

    pub fn has(&self, name: &str) -> Result<bool> {
        Ok(self.repository.load_manager()?.exists(name))
    }

    /// Current tags in insertion order
    pub fn list(&self) -> Result<Vec<Label>> {
        Ok(self.repository.load_manager()?.tags().to_vec())
    }

    /// Every label ever added in this repository, sorted
    pub fn known(&self) -> Result<Vec<Label>> {
        Ok(self.repository.load_registry()?.iter().cloned().collect())
    }

    fn edit<F>(&self, apply: F) -> Result<EditReport>
    where
        F: FnOnce(&mut TagManager),
    {
        let config = self.repository.load_config()?;
        let mut manager = self.repository.load_manager()?;
        let before = manager.tags().to_vec();

        apply(&mut manager);

        let version = if config.auto_checkpoint {
            manager.checkpoint()
        } else {
            None
        };

        self.repository.save_manager(&manager)?;

        Ok(EditReport {
            before,
            after: manager.tags().to_vec(),
            version,
        })
    }
}
