//! Registry of every label ever introduced

use crate::domain::Label;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Collaborator notified whenever a label is added to a collection.
///
/// Implementations must accept the same label any number of times; a
/// collection calls this on every non-empty add, including re-adds.
pub trait LabelRegistry {
    fn register_if_absent(&mut self, label: &Label);
}

/// Append-only set of known labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownLabels {
    #[serde(default)]
    labels: BTreeSet<Label>,
}

impl KnownLabels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        Label::new(name).is_some_and(|label| self.labels.contains(&label))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Known labels in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.labels.iter()
    }
}

impl LabelRegistry for KnownLabels {
    fn register_if_absent(&mut self, label: &Label) {
        if self.labels.insert(label.clone()) {
            tracing::debug!(label = %label, "registered new label");
        }
    }
}
