//! Error types for tagtrail

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tagtrail
#[derive(Debug, Error)]
pub enum TagtrailError {
    #[error("Not a tagtrail directory: {0}")]
    NotTagtrailDirectory(PathBuf),

    #[error("Version not found: {0}")]
    VersionNotFound(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid tag state: {0}")]
    State(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TagtrailError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TagtrailError::NotTagtrailDirectory(_) => 2,
            TagtrailError::VersionNotFound(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagtrailError::NotTagtrailDirectory(path) => {
                format!(
                    "Not a tagtrail directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'tagtrail init' in this directory to start tracking tags\n\
                    • Navigate to an existing tagtrail directory\n\
                    • Set TAGTRAIL_ROOT environment variable to your tagtrail path",
                    path.display()
                )
            }
            TagtrailError::VersionNotFound(version) => {
                format!(
                    "Version not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'tagtrail history' to see recorded versions\n\
                    • Versions are numbered from 0\n\
                    • Run 'tagtrail checkpoint' to record the current tags",
                    version
                )
            }
            TagtrailError::State(msg) => {
                format!(
                    "Invalid tag state: {}\n\n\
                    The file .tagtrail/tags.toml was edited by hand or is corrupt.\n\
                    Adjacent versions must differ and version 0 must not be empty.",
                    msg
                )
            }
            TagtrailError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: tagtrail config owner 'notes/2025-01-17.md'",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagtrailError
pub type Result<T> = std::result::Result<T, TagtrailError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_tagtrail_directory_suggestion() {
        let err = TagtrailError::NotTagtrailDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("tagtrail init"));
        assert!(msg.contains("TAGTRAIL_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_version_not_found_suggestions() {
        let err = TagtrailError::VersionNotFound(4);
        let msg = err.display_with_suggestions();
        assert!(msg.contains("Version not found: 4"));
        assert!(msg.contains("tagtrail history"));
    }

    #[test]
    fn test_state_error_explains_invariants() {
        let err = TagtrailError::State("Versions 0 and 1 are identical".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("tags.toml"));
        assert!(msg.contains("Adjacent versions must differ"));
    }

    #[test]
    fn test_config_unknown_key_example() {
        let err = TagtrailError::Config("Unknown config key: 'mode'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("tagtrail config owner"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            TagtrailError::NotTagtrailDirectory(PathBuf::from(".")).exit_code(),
            2
        );
        assert_eq!(TagtrailError::VersionNotFound(0).exit_code(), 3);
        assert_eq!(TagtrailError::Config("x".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = TagtrailError::Config("Something odd".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Something odd");
    }
}
