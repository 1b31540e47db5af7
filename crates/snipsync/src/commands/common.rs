//! Common types and utilities for command execution

use anyhow::Context;
use snipsync_core::config::ConfigManager;
use snipsync_core::sync::{FailurePolicy, SyncEngine, SyncOptions, SyncReporter, SyncResult};

/// Execution options shared by every command
#[allow(clippy::struct_excessive_bools)]
pub struct CommandOptions<'a> {
    /// Enable verbose output
    pub verbose: bool,
    /// Preview changes without applying (dry-run)
    pub dry_run: bool,
    /// Continue past snippets that fail to format
    pub keep_going: bool,
    /// Path to custom config file
    pub config_path: Option<&'a std::path::Path>,
}

impl<'a> CommandOptions<'a> {
    /// Create new command options
    #[must_use]
    #[allow(clippy::fn_params_excessive_bools)]
    pub const fn new(
        verbose: bool,
        dry_run: bool,
        keep_going: bool,
        config_path: Option<&'a std::path::Path>,
    ) -> Self {
        Self {
            verbose,
            dry_run,
            keep_going,
            config_path,
        }
    }

    /// Load the config file and build a sync engine from it
    pub fn engine(&self) -> anyhow::Result<SyncEngine> {
        let config = ConfigManager::load(self.config_path).context("Failed to load configuration")?;

        if self.verbose {
            println!("Preference file: {}", config.preference_file.display());
            println!("Snippet directory: {}", config.snippet_dir.display());
        }

        let failure_policy = if self.keep_going {
            FailurePolicy::KeepGoing
        } else {
            FailurePolicy::FailFast
        };

        Ok(SyncEngine::new(
            config,
            SyncOptions {
                dry_run: self.dry_run,
                show_diff: self.dry_run && self.verbose,
                failure_policy,
            },
        ))
    }

    /// Print the status line, plus the summary in verbose mode or after
    /// snippet failures
    pub fn report(&self, result: &SyncResult) {
        println!("{}", SyncReporter::status_line(result));

        if self.verbose || !result.is_success() {
            println!("{}", SyncReporter::generate_summary(result));
        }
    }
}
