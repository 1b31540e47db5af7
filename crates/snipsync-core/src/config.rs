//! Configuration file parsing and validation
//!
//! This module handles:
//! - Locating `config.json` (working directory or an explicit path)
//! - JSON parsing with serde
//! - `~` expansion and resolution of relative paths
//! - Validation and error reporting

mod discovery;
mod types;
mod validation;

use std::fs;
use std::path::Path;

pub use discovery::{ConfigDiscovery, DEFAULT_CONFIG_FILE};
pub use types::{Config, RawConfig};
pub use validation::ConfigValidator;

use crate::error::{Result, SnipsyncError};

/// Loads the configuration once at startup
pub struct ConfigManager;

impl ConfigManager {
    /// Load, validate, and resolve the configuration
    ///
    /// With no explicit path, `config.json` in the current directory is used.
    ///
    /// # Errors
    ///
    /// Returns [`SnipsyncError::Config`] if the file is missing, is not valid
    /// JSON, or holds invalid values.
    pub fn load(cli_config_path: Option<&Path>) -> Result<Config> {
        let path = ConfigDiscovery::locate(cli_config_path);
        tracing::debug!(path = %path.display(), "loading configuration");

        let contents = fs::read_to_string(&path).map_err(|e| SnipsyncError::Config {
            path: path.clone(),
            reason: format!("cannot read file: {e}"),
        })?;

        let raw: RawConfig =
            serde_json::from_str(&contents).map_err(|e| SnipsyncError::Config {
                path: path.clone(),
                reason: format!("invalid JSON: {e}"),
            })?;

        ConfigValidator::validate(&raw).map_err(|reason| SnipsyncError::Config {
            path: path.clone(),
            reason,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let config = raw.resolve(base);

        tracing::debug!(
            preference_file = %config.preference_file.display(),
            snippet_dir = %config.snippet_dir.display(),
            "configuration resolved"
        );

        Ok(config)
    }
}
