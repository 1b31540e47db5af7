//! Error types for snipsync
//!
//! Every failure the library can produce maps onto one variant of
//! [`SnipsyncError`]. The CLI adds command context on top with `anyhow`.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias using [`SnipsyncError`]
pub type Result<T> = std::result::Result<T, SnipsyncError>;

/// Top-level error type for snipsync operations
#[derive(Debug, Error)]
pub enum SnipsyncError {
    /// Config file missing, malformed, or holding invalid values
    #[error("Configuration error in {path}: {reason}")]
    Config {
        /// Config file that was being loaded
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// A JSON document (or the JSON embedded in it) failed to parse
    #[error("Failed to parse {what}: {source}")]
    Parse {
        /// Human-readable description of the document
        what: String,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// The preference document does not have the expected shape
    #[error("Unexpected preference file structure: {0}")]
    Structure(String),

    /// Snippet content is not valid source for the formatter
    #[error("Failed to format snippet '{name}': {reason}")]
    Format {
        /// Snippet name
        name: String,
        /// Parser diagnostics
        reason: String,
    },

    /// Snippet name cannot be used as a file name
    #[error("Invalid snippet name '{0}': names must be non-empty and contain no path separators")]
    InvalidName(String),

    /// Filesystem operation failed
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path the operation was acting on
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Several snippets failed while writing with a keep-going policy
    #[error("{} snippet(s) failed:\n  - {}", .0.len(), .0.join("\n  - "))]
    Batch(Vec<String>),
}

impl SnipsyncError {
    /// Build an [`SnipsyncError::Io`] for `path`
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Build an [`SnipsyncError::Parse`] describing `what` failed
    pub fn parse(what: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            what: what.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let err = SnipsyncError::io(
            "/tmp/missing.json",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );

        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.json"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_batch_error_lists_every_failure() {
        let err = SnipsyncError::Batch(vec!["first".to_string(), "second".to_string()]);

        let msg = err.to_string();
        assert!(msg.starts_with("2 snippet(s) failed"));
        assert!(msg.contains("  - first"));
        assert!(msg.contains("  - second"));
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SnipsyncError::parse("preference file", source);

        assert!(err.to_string().starts_with("Failed to parse preference file"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
