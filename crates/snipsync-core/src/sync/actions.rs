//! Snippet write action determination logic

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::snippets::{Snippet, SnippetDirectory};

/// Write action for one snippet during load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnippetAction {
    /// Snippet file does not exist yet
    Create {
        /// File to create
        path: PathBuf,
        /// Formatted snippet source
        content: String,
    },
    /// Snippet file exists with different content
    Update {
        /// File to overwrite
        path: PathBuf,
        /// Formatted snippet source
        content: String,
        /// What the file holds now
        previous: String,
    },
    /// Snippet file already holds the formatted content
    Unchanged {
        /// File left as is
        path: PathBuf,
    },
}

impl SnippetAction {
    /// Target file of this action
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Create { path, .. } | Self::Update { path, .. } | Self::Unchanged { path } => {
                path
            }
        }
    }
}

/// Resolves snippets into write actions
pub struct SnippetActionResolver;

impl SnippetActionResolver {
    /// Format `snippet` and compare it with what is on disk in `dir`
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid, the content does not parse,
    /// or the existing file cannot be read.
    pub fn resolve(dir: &Path, snippet: &Snippet) -> Result<SnippetAction> {
        let (path, content) = SnippetDirectory::render_snippet(dir, snippet)?;

        let action = match SnippetDirectory::read_existing(&path)? {
            None => SnippetAction::Create { path, content },
            Some(previous) if previous == content => SnippetAction::Unchanged { path },
            Some(previous) => SnippetAction::Update {
                path,
                content,
                previous,
            },
        };

        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snippets::SnippetFormatter;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_create() {
        let tmp = TempDir::new().unwrap();

        let action = SnippetActionResolver::resolve(tmp.path(), &Snippet::new("a", "1")).unwrap();

        assert!(matches!(action, SnippetAction::Create { .. }));
        assert_eq!(action.path(), tmp.path().join("a.js"));
    }

    #[test]
    fn test_resolve_unchanged() {
        let tmp = TempDir::new().unwrap();
        let snippet = Snippet::new("a", "let x=1");
        let formatted = SnippetFormatter::format("a", &snippet.content).unwrap();
        fs::write(tmp.path().join("a.js"), &formatted).unwrap();

        let action = SnippetActionResolver::resolve(tmp.path(), &snippet).unwrap();

        assert_eq!(
            action,
            SnippetAction::Unchanged {
                path: tmp.path().join("a.js")
            }
        );
    }

    #[test]
    fn test_resolve_update() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.js"), "old content").unwrap();

        let action = SnippetActionResolver::resolve(tmp.path(), &Snippet::new("a", "1")).unwrap();

        match action {
            SnippetAction::Update { previous, .. } => assert_eq!(previous, "old content"),
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_invalid_source() {
        let tmp = TempDir::new().unwrap();

        assert!(SnippetActionResolver::resolve(tmp.path(), &Snippet::new("a", "let = ;")).is_err());
    }
}
