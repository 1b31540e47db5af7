//! Configuration validation and error reporting

use super::types::RawConfig;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid value.
    pub fn validate(config: &RawConfig) -> Result<(), String> {
        if config.preference_file.trim().is_empty() {
            return Err("preferenceFile cannot be empty".to_string());
        }

        if config.snippet_dir.trim().is_empty() {
            return Err("snippetDir cannot be empty".to_string());
        }

        if config.preference_file.trim() == config.snippet_dir.trim() {
            return Err("preferenceFile and snippetDir must be different paths".to_string());
        }

        Ok(())
    }
}
