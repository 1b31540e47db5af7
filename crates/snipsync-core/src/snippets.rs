//! Snippet values and their on-disk representation
//!
//! - `directory`: one `.js` file per snippet inside a flat directory
//! - `formatter`: fixed-style JavaScript formatting applied on load

mod directory;
mod formatter;

use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

pub use directory::{SNIPPET_EXTENSION, SnippetDirectory};
pub use formatter::SnippetFormatter;

use crate::error::{Result, SnipsyncError};

/// A named block of source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Snippet name, also the file stem on disk
    pub name: String,
    /// Source code text
    pub content: String,
}

impl Snippet {
    /// Create a snippet
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Decode the JSON array stored in the preference file
    ///
    /// # Errors
    ///
    /// Returns [`SnipsyncError::Parse`] if `encoded` is not an array of
    /// `{name, content}` objects.
    pub fn parse_list(encoded: &str) -> Result<Vec<Self>> {
        serde_json::from_str(encoded).map_err(|e| SnipsyncError::parse("embedded scriptSnippets", e))
    }

    /// Encode snippets the way the preference file stores them
    ///
    /// # Errors
    ///
    /// Returns [`SnipsyncError::Parse`] if serialization fails.
    pub fn serialize_list(snippets: &[Self]) -> Result<String> {
        serde_json::to_string(snippets)
            .map_err(|e| SnipsyncError::parse("snippet list for writing", e))
    }

    /// Check that the name maps to exactly one file inside a directory
    ///
    /// # Errors
    ///
    /// Returns [`SnipsyncError::InvalidName`] for empty names, `.`/`..`, and
    /// names containing a path separator.
    pub fn validate_name(name: &str) -> Result<()> {
        let mut components = Path::new(name).components();
        let single_normal = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );

        if !single_normal || name.contains(['/', '\\']) {
            return Err(SnipsyncError::InvalidName(name.to_string()));
        }

        Ok(())
    }
}
