//! Tag manager aggregate: live labels plus their history

use crate::domain::collection::{Iter, TagCollection};
use crate::domain::history::{Snapshot, TagHistory};
use crate::domain::registry::LabelRegistry;
use crate::domain::Label;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Owns the tags of one entity and the versions they went through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagManager {
    #[serde(default)]
    tags: TagCollection,
    #[serde(default)]
    history: TagHistory,
}

impl TagManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.tags.exists(name)
    }

    pub fn add_tag<R>(&mut self, name: &str, registry: &mut R)
    where
        R: LabelRegistry + ?Sized,
    {
        self.tags.add(name, registry);
    }

    pub fn delete_tag(&mut self, name: &str) {
        self.tags.delete(name);
    }

    pub fn set_tags<I>(&mut self, labels: I)
    where
        I: IntoIterator<Item = Label>,
    {
        self.tags.replace_all(labels);
    }

    /// Record the current tags as a new version if they changed.
    pub fn checkpoint(&mut self) -> Option<usize> {
        self.history.checkpoint(self.tags.as_slice())
    }

    pub fn tags(&self) -> &TagCollection {
        &self.tags
    }

    pub fn history(&self) -> &TagHistory {
        &self.history
    }

    pub fn versions(&self) -> BTreeMap<usize, Snapshot> {
        self.history.all()
    }

    pub fn iter(&self) -> Iter<'_> {
        self.tags.iter()
    }
}

impl<'a> IntoIterator for &'a TagManager {
    type Item = &'a Label;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
