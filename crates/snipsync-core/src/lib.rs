//! # snipsync-core
//!
//! Core library for keeping browser devtools script snippets in sync with
//! plain files on disk.
//!
//! The devtools preference file stores every snippet inside one JSON-encoded
//! string at `devtools.preferences.scriptSnippets`. This library unpacks that
//! string into one `.js` file per snippet (load), packs the files back into
//! the preference file (save), and keeps a `.bak` copy of the preference file
//! so a save can be undone (restore).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;

/// Backup and restore of the preference file
pub mod backup;

/// Configuration file parsing and validation
pub mod config;

/// Reading and writing the devtools preference file
pub mod preferences;

/// Snippet values, the snippet directory, and the formatter
pub mod snippets;

/// Load, save, and restore orchestration
pub mod sync;

pub use error::{Result, SnipsyncError};
