//! Compacted version history of a tag collection
//!
//! History is an append-only list of frozen [`Snapshot`]s. The version key of
//! a snapshot is its position in the list. A checkpoint only records a new
//! snapshot when the live labels differ from the latest one, so two adjacent
//! versions are never equal. An empty first version is never recorded.
//!
//! # Examples
//!
//! ```
//! use tagtrail::domain::{Label, TagHistory};
//!
//! let mut history = TagHistory::new();
//! let labels = vec![Label::new("x").unwrap()];
//!
//! assert_eq!(history.checkpoint(&[]), None);
//! assert_eq!(history.checkpoint(&labels), Some(0));
//! assert_eq!(history.checkpoint(&labels), None);
//! assert_eq!(history.checkpoint(&[]), Some(1));
//! ```

use crate::domain::Label;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Deref;

/// Frozen copy of a label sequence.
///
/// A snapshot has no mutating methods. Use [`Snapshot::to_vec`] for an
/// editable copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    labels: Vec<Label>,
}

impl Snapshot {
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn to_vec(&self) -> Vec<Label> {
        self.labels.clone()
    }

    /// Normalized names, in order.
    pub fn names(&self) -> Vec<&str> {
        self.labels.iter().map(Label::as_str).collect()
    }

    /// Element-wise comparison by normalized name.
    pub fn matches(&self, labels: &[Label]) -> bool {
        self.labels.len() == labels.len()
            && self
                .labels
                .iter()
                .zip(labels)
                .all(|(stored, live)| stored.as_str() == live.as_str())
    }
}

impl Deref for Snapshot {
    type Target = [Label];

    fn deref(&self) -> &Self::Target {
        &self.labels
    }
}

impl From<&[Label]> for Snapshot {
    fn from(labels: &[Label]) -> Self {
        Snapshot {
            labels: labels.to_vec(),
        }
    }
}

impl From<Vec<Label>> for Snapshot {
    fn from(labels: Vec<Label>) -> Self {
        Snapshot { labels }
    }
}

/// Where a history currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryState {
    /// Nothing recorded yet
    Empty,
    /// At least one version recorded; `latest` is its key
    Recording { latest: usize },
}

/// Append-only list of snapshots keyed by position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Snapshot>", into = "Vec<Snapshot>")]
pub struct TagHistory {
    snapshots: Vec<Snapshot>,
}

impl TagHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `current` as a new version if it differs from the latest one.
    ///
    /// Returns the key of the recorded version, or `None` when nothing was
    /// recorded: either `current` equals the latest version, or history is
    /// empty and so is `current`.
    pub fn checkpoint(&mut self, current: &[Label]) -> Option<usize> {
        let novel = match self.snapshots.last() {
            None => !current.is_empty(),
            Some(latest) => !latest.matches(current),
        };

        if !novel {
            tracing::debug!(versions = self.snapshots.len(), "checkpoint unchanged");
            return None;
        }

        let key = self.snapshots.len();
        self.snapshots.push(Snapshot::from(current));
        tracing::info!(version = key, labels = current.len(), "recorded version");
        Some(key)
    }

    /// Every version keyed by its number.
    ///
    /// The map is an owned copy; changing it leaves this history untouched.
    pub fn all(&self) -> BTreeMap<usize, Snapshot> {
        self.iter()
            .map(|(key, snapshot)| (key, snapshot.clone()))
            .collect()
    }

    pub fn get(&self, key: usize) -> Option<&Snapshot> {
        self.snapshots.get(key)
    }

    pub fn latest(&self) -> Option<(usize, &Snapshot)> {
        self.snapshots
            .last()
            .map(|snapshot| (self.snapshots.len() - 1, snapshot))
    }

    pub fn state(&self) -> HistoryState {
        match self.latest() {
            None => HistoryState::Empty,
            Some((latest, _)) => HistoryState::Recording { latest },
        }
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Snapshot)> {
        self.snapshots.iter().enumerate()
    }
}

impl TryFrom<Vec<Snapshot>> for TagHistory {
    type Error = String;

    fn try_from(snapshots: Vec<Snapshot>) -> Result<Self, Self::Error> {
        if snapshots.first().is_some_and(|first| first.is_empty()) {
            return Err("Version 0 cannot be empty".to_string());
        }

        for (key, pair) in snapshots.windows(2).enumerate() {
            if pair[1].matches(&pair[0]) {
                return Err(format!(
                    "Versions {} and {} are identical",
                    key,
                    key + 1
                ));
            }
        }

        Ok(TagHistory { snapshots })
    }
}

impl From<TagHistory> for Vec<Snapshot> {
    fn from(history: TagHistory) -> Self {
        history.snapshots
    }
}
