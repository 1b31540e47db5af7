//! Reading and writing the devtools preference file
//!
//! The preference file is one large JSON object. Snippets live at
//! `devtools.preferences.scriptSnippets` as a JSON array that has itself been
//! encoded into a string.

mod document;

use std::fs;
use std::path::Path;

pub use document::PreferenceDocument;

use crate::error::{Result, SnipsyncError};
use crate::snippets::Snippet;

/// Preference file access
pub struct PreferenceStore;

impl PreferenceStore {
    /// Read and parse the preference file at `path`
    ///
    /// # Errors
    ///
    /// Returns [`SnipsyncError::Io`] if the file cannot be read and
    /// [`SnipsyncError::Parse`] if it is not valid JSON.
    pub fn read(path: &Path) -> Result<PreferenceDocument> {
        let text = fs::read_to_string(path).map_err(|e| SnipsyncError::io(path, e))?;
        PreferenceDocument::parse(&text)
    }

    /// Decode the snippet list embedded in `doc`
    ///
    /// A document without the field yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`SnipsyncError::Parse`] if the embedded string is not a JSON
    /// array of `{name, content}` objects.
    pub fn extract_snippets(doc: &PreferenceDocument) -> Result<Vec<Snippet>> {
        match doc.script_snippets()? {
            Some(encoded) => Snippet::parse_list(encoded),
            None => {
                tracing::debug!("preference file has no scriptSnippets field");
                Ok(Vec::new())
            }
        }
    }

    /// Return a copy of `doc` with the snippet field set to `serialized`
    ///
    /// # Errors
    ///
    /// Returns [`SnipsyncError::Structure`] if `devtools.preferences` does
    /// not exist.
    pub fn inject_snippets(doc: &PreferenceDocument, serialized: String) -> Result<PreferenceDocument> {
        let mut updated = doc.clone();
        updated.set_script_snippets(serialized)?;
        Ok(updated)
    }

    /// Serialize `doc` and overwrite the file at `path`
    ///
    /// # Errors
    ///
    /// Returns [`SnipsyncError::Io`] if the file cannot be written.
    pub fn write(path: &Path, doc: &PreferenceDocument) -> Result<()> {
        let text = doc.to_json()?;
        fs::write(path, text).map_err(|e| SnipsyncError::io(path, e))
    }
}
