//! Live, ordered tag collection

use crate::domain::history::Snapshot;
use crate::domain::label::{normalize, Label};
use crate::domain::registry::LabelRegistry;
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;

/// Ordered set of labels belonging to one owner.
///
/// Insertion order is preserved and no two labels share a normalized name.
/// Every lookup normalizes its input, so `work` and `@work` address the
/// same label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Label>", into = "Vec<Label>")]
pub struct TagCollection {
    labels: Vec<Label>,
}

impl TagCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff a label with the normalized form of `name` is present.
    pub fn exists(&self, name: &str) -> bool {
        match normalize(name) {
            Some(normalized) => self.position(&normalized).is_some(),
            None => false,
        }
    }

    /// Add `name` (normalized) unless it is already present.
    ///
    /// The registry is notified for every non-empty name, whether or not the
    /// label was new here. An empty name does nothing at all.
    pub fn add<R>(&mut self, name: &str, registry: &mut R)
    where
        R: LabelRegistry + ?Sized,
    {
        let Some(label) = Label::new(name) else {
            return;
        };

        if self.position(label.as_str()).is_none() {
            tracing::debug!(label = %label, "adding label");
            self.labels.push(label.clone());
        }

        registry.register_if_absent(&label);
    }

    /// Remove the label matching `name`, keeping the others in order.
    pub fn delete(&mut self, name: &str) {
        let Some(normalized) = normalize(name) else {
            return;
        };

        if let Some(index) = self.position(&normalized) {
            tracing::debug!(label = %normalized, "deleting label");
            self.labels.remove(index);
        }
    }

    /// Replace the whole collection with `labels`, in order.
    ///
    /// A repeated label keeps its first position.
    pub fn replace_all<I>(&mut self, labels: I)
    where
        I: IntoIterator<Item = Label>,
    {
        let mut replaced: Vec<Label> = Vec::new();
        for label in labels {
            if !replaced.contains(&label) {
                replaced.push(label);
            }
        }

        tracing::debug!(count = replaced.len(), "replacing labels");
        self.labels = replaced;
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn as_slice(&self) -> &[Label] {
        &self.labels
    }

    /// Iterate labels in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            labels: &self.labels,
            index: 0,
        }
    }

    /// Owned copy of the current labels.
    pub fn to_vec(&self) -> Vec<Label> {
        self.labels.clone()
    }

    /// Freeze the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self.as_slice())
    }

    fn position(&self, normalized: &str) -> Option<usize> {
        self.labels.iter().position(|l| l.as_str() == normalized)
    }
}

impl From<Vec<Label>> for TagCollection {
    fn from(labels: Vec<Label>) -> Self {
        let mut collection = TagCollection::new();
        collection.replace_all(labels);
        collection
    }
}

impl From<TagCollection> for Vec<Label> {
    fn from(collection: TagCollection) -> Self {
        collection.labels
    }
}

impl<'a> IntoIterator for &'a TagCollection {
    type Item = &'a Label;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Index-based iterator over a [`TagCollection`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    labels: &'a [Label],
    index: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Label;

    fn next(&mut self) -> Option<Self::Item> {
        let label = self.labels.get(self.index)?;
        self.index += 1;
        Some(label)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.labels.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
