//! Snippet file write executor
//!
//! Dry-run notices and diffs go to stderr; stdout carries only the status
//! line.

use std::io::IsTerminal;

use super::SyncResult;
use super::actions::SnippetAction;
use super::diff::DiffGenerator;
use crate::error::Result;
use crate::snippets::SnippetDirectory;

/// Applies snippet actions to the snippet directory
pub struct SnippetWriter {
    dry_run: bool,
    show_diff: bool,
}

impl SnippetWriter {
    /// Create a new writer
    #[must_use]
    pub const fn new(dry_run: bool, show_diff: bool) -> Self {
        Self { dry_run, show_diff }
    }

    /// Execute a snippet action
    ///
    /// # Errors
    ///
    /// Returns an error if the snippet file cannot be written.
    pub fn execute(&self, action: &SnippetAction, result: &mut SyncResult) -> Result<()> {
        match action {
            SnippetAction::Create { path, content } => {
                if self.dry_run {
                    eprintln!("[DRY RUN] Would create: {}", path.display());
                } else {
                    SnippetDirectory::write_file(path, content)?;
                }
                result.created += 1;
            }
            SnippetAction::Update {
                path,
                content,
                previous,
            } => {
                if self.dry_run {
                    eprintln!("[DRY RUN] Would update: {}", path.display());
                    if self.show_diff {
                        eprint!("{}", Self::diff(previous, content, path));
                    }
                } else {
                    SnippetDirectory::write_file(path, content)?;
                }
                result.updated += 1;
            }
            SnippetAction::Unchanged { path } => {
                tracing::debug!(path = %path.display(), "snippet file already up to date");
                result.unchanged += 1;
            }
        }
        Ok(())
    }

    fn diff(previous: &str, content: &str, path: &std::path::Path) -> String {
        if std::io::stderr().is_terminal() {
            DiffGenerator::generate(previous, content, path)
        } else {
            DiffGenerator::generate_plain(previous, content, path)
        }
    }
}
