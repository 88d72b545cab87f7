//! Tag labels and name normalization

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Marker character every normalized label starts with.
pub const MARKER: char = '@';

/// Prefix `name` with [`MARKER`] unless it already starts with it.
///
/// Returns `None` for the empty string, which is never a label.
/// Normalization is case-sensitive: `Work` and `work` stay distinct.
pub fn normalize(name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }

    if name.starts_with(MARKER) {
        Some(name.to_string())
    } else {
        Some(format!("{}{}", MARKER, name))
    }
}

/// A single tag label in normalized form (e.g. `@work`).
///
/// Labels are immutable values. Two labels are equal iff their normalized
/// names are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Label(String);

impl Label {
    /// Build a label from a bare or already prefixed name.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagtrail::domain::Label;
    ///
    /// assert_eq!(Label::new("work").unwrap().as_str(), "@work");
    /// assert_eq!(Label::new("@work").unwrap().as_str(), "@work");
    /// assert!(Label::new("").is_none());
    /// ```
    pub fn new(name: &str) -> Option<Self> {
        normalize(name).map(Label)
    }

    /// The normalized name, marker included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name without its leading marker.
    pub fn bare(&self) -> &str {
        &self.0[MARKER.len_utf8()..]
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Label {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for Label {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Label::new(s).ok_or_else(|| "Label name cannot be empty".to_string())
    }
}

impl TryFrom<String> for Label {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.starts_with(MARKER) {
            return Ok(Label(value));
        }
        value.parse()
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.0
    }
}
