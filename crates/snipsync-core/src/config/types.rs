//! Configuration types and structures

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration exactly as written in `config.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    /// Path to the browser's devtools preference file
    pub preference_file: String,

    /// Directory holding one `.js` file per snippet
    pub snippet_dir: String,
}

/// Resolved configuration passed to the sync engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Absolute or working-directory-relative preference file path
    pub preference_file: PathBuf,

    /// Absolute or working-directory-relative snippet directory
    pub snippet_dir: PathBuf,
}

impl Config {
    /// Build a config from already-resolved paths
    pub fn new(preference_file: impl Into<PathBuf>, snippet_dir: impl Into<PathBuf>) -> Self {
        Self {
            preference_file: preference_file.into(),
            snippet_dir: snippet_dir.into(),
        }
    }
}

impl RawConfig {
    /// Expand `~` and resolve relative paths against `base`
    #[must_use]
    pub fn resolve(&self, base: &Path) -> Config {
        Config {
            preference_file: resolve_path(&self.preference_file, base),
            snippet_dir: resolve_path(&self.snippet_dir, base),
        }
    }
}

fn resolve_path(raw: &str, base: &Path) -> PathBuf {
    let expanded = expand_home(raw.trim());
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}

fn expand_home(raw: &str) -> PathBuf {
    let rest = if raw == "~" {
        Some("")
    } else {
        raw.strip_prefix("~/")
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(raw),
    }
}
