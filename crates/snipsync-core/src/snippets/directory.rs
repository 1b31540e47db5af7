//! Flat snippet directory
//!
//! Each snippet is stored as `<name>.js` directly in the snippet directory.
//! Subdirectories and files with other extensions are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{Snippet, SnippetFormatter};
use crate::error::{Result, SnipsyncError};

/// Extension of snippet files, without the dot
pub const SNIPPET_EXTENSION: &str = "js";

/// Snippet directory operations
pub struct SnippetDirectory;

impl SnippetDirectory {
    /// Create the directory (and missing parents) if it does not exist
    ///
    /// # Errors
    ///
    /// Returns [`SnipsyncError::Io`] if the directory cannot be created.
    pub fn ensure_exists(dir: &Path) -> Result<()> {
        if dir.is_dir() {
            return Ok(());
        }

        tracing::info!(dir = %dir.display(), "creating snippet directory");
        fs::create_dir_all(dir).map_err(|e| SnipsyncError::io(dir, e))
    }

    /// Path of the file backing the snippet called `name`
    ///
    /// # Errors
    ///
    /// Returns [`SnipsyncError::InvalidName`] if `name` is not a plain file
    /// stem.
    pub fn snippet_path(dir: &Path, name: &str) -> Result<PathBuf> {
        Snippet::validate_name(name)?;
        Ok(dir.join(format!("{name}.{SNIPPET_EXTENSION}")))
    }

    /// Target path and formatted content for `snippet`, without writing
    ///
    /// Loading writes the returned content with [`Self::write_file`] once it
    /// knows the file actually changes, so a snippet that fails here never
    /// touches the disk.
    ///
    /// # Errors
    ///
    /// Returns [`SnipsyncError::InvalidName`] for unusable names and
    /// [`SnipsyncError::Format`] for invalid source.
    pub fn render_snippet(dir: &Path, snippet: &Snippet) -> Result<(PathBuf, String)> {
        let path = Self::snippet_path(dir, &snippet.name)?;
        let formatted = SnippetFormatter::format(&snippet.name, &snippet.content)?;
        Ok((path, formatted))
    }

    /// Write already-formatted content to `path`
    ///
    /// # Errors
    ///
    /// Returns [`SnipsyncError::Io`] if the file cannot be written.
    pub fn write_file(path: &Path, content: &str) -> Result<()> {
        tracing::debug!(path = %path.display(), "writing snippet file");
        fs::write(path, content).map_err(|e| SnipsyncError::io(path, e))
    }

    /// Current content of the file at `path`, if it exists
    ///
    /// # Errors
    ///
    /// Returns [`SnipsyncError::Io`] if the file exists but cannot be read.
    pub fn read_existing(path: &Path) -> Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SnipsyncError::io(path, e)),
        }
    }

    /// Read every `.js` file in `dir` as a snippet, sorted by name
    ///
    /// Symlinked snippet files are followed and read like regular files.
    ///
    /// # Errors
    ///
    /// Returns [`SnipsyncError::Io`] if the directory or a snippet file
    /// cannot be read.
    pub fn read_all(dir: &Path) -> Result<Vec<Snippet>> {
        if !dir.is_dir() {
            return Err(SnipsyncError::io(
                dir,
                std::io::Error::new(std::io::ErrorKind::NotFound, "snippet directory not found"),
            ));
        }

        let mut snippets = Vec::new();

        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                SnipsyncError::io(path, e.into())
            })?;

            if !entry.file_type().is_file() {
                tracing::debug!(path = %entry.path().display(), "ignoring non-file entry");
                continue;
            }

            let Some(file_name) = entry.file_name().to_str() else {
                tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 file name");
                continue;
            };

            let Some(name) = file_name.strip_suffix(&format!(".{SNIPPET_EXTENSION}")) else {
                tracing::debug!(file = file_name, "ignoring non-snippet file");
                continue;
            };

            if name.is_empty() {
                continue;
            }

            let content =
                fs::read_to_string(entry.path()).map_err(|e| SnipsyncError::io(entry.path(), e))?;
            snippets.push(Snippet::new(name, content));
        }

        Ok(snippets)
    }
}
