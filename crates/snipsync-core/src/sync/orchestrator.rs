//! Sync orchestration - coordinates load, save, and restore

use super::actions::SnippetActionResolver;
use super::executor::SnippetWriter;
use super::{FailurePolicy, SyncOperation, SyncOptions, SyncResult};
use crate::backup::BackupManager;
use crate::config::Config;
use crate::error::Result;
use crate::preferences::PreferenceStore;
use crate::snippets::{Snippet, SnippetDirectory};

/// Main sync engine
pub struct SyncEngine {
    config: Config,
    options: SyncOptions,
}

impl SyncEngine {
    /// Create a new sync engine
    #[must_use]
    pub const fn new(config: Config, options: SyncOptions) -> Self {
        Self { config, options }
    }

    /// Unpack the preference file into the snippet directory
    ///
    /// Snippets are written in the order they appear in the preference file.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference file cannot be read or parsed, or
    /// if a snippet cannot be written. With [`FailurePolicy::KeepGoing`]
    /// snippet failures do not abort the run; they are collected in
    /// [`SyncResult::errors`] next to the counts of what did load.
    pub fn load(&self) -> Result<SyncResult> {
        let mut result = SyncResult::new(SyncOperation::Load, self.options.dry_run);

        let doc = PreferenceStore::read(&self.config.preference_file)?;
        let snippets = PreferenceStore::extract_snippets(&doc)?;
        tracing::info!(
            count = snippets.len(),
            from = %self.config.preference_file.display(),
            "loading snippets"
        );

        if !self.options.dry_run {
            SnippetDirectory::ensure_exists(&self.config.snippet_dir)?;
        }

        let writer = SnippetWriter::new(self.options.dry_run, self.options.show_diff);

        for snippet in &snippets {
            if let Err(e) = self.load_one(&writer, snippet, &mut result) {
                match self.options.failure_policy {
                    FailurePolicy::FailFast => return Err(e),
                    FailurePolicy::KeepGoing => {
                        tracing::error!(snippet = %snippet.name, "{e}");
                        result.errors.push(e.to_string());
                    }
                }
            }
        }

        Ok(result)
    }

    fn load_one(
        &self,
        writer: &SnippetWriter,
        snippet: &Snippet,
        result: &mut SyncResult,
    ) -> Result<()> {
        let action = SnippetActionResolver::resolve(&self.config.snippet_dir, snippet)?;
        writer.execute(&action, result)
    }

    /// Pack the snippet directory into the preference file
    ///
    /// The preference file is backed up before anything is read or changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the backup, the directory read, or the
    /// preference file update fails.
    pub fn save(&self) -> Result<SyncResult> {
        let mut result = SyncResult::new(SyncOperation::Save, self.options.dry_run);
        let pref_path = &self.config.preference_file;

        if self.options.dry_run {
            eprintln!(
                "[DRY RUN] Would back up: {} -> {}",
                pref_path.display(),
                BackupManager::backup_path(pref_path).display()
            );
        } else {
            result.backup = Some(BackupManager::backup(pref_path)?);
        }

        let snippets = SnippetDirectory::read_all(&self.config.snippet_dir)?;
        let serialized = Snippet::serialize_list(&snippets)?;

        let doc = PreferenceStore::read(pref_path)?;
        let changed = doc.script_snippets()? != Some(serialized.as_str());
        let updated = PreferenceStore::inject_snippets(&doc, serialized)?;

        tracing::info!(
            count = snippets.len(),
            changed,
            to = %pref_path.display(),
            "saving snippets"
        );

        if self.options.dry_run {
            eprintln!("[DRY RUN] Would write: {}", pref_path.display());
        } else {
            PreferenceStore::write(pref_path, &updated)?;
        }

        result.saved = snippets.len();
        Ok(result)
    }

    /// Replace the preference file with its backup
    ///
    /// # Errors
    ///
    /// Returns [`crate::SnipsyncError::Io`] if there is no backup.
    pub fn restore(&self) -> Result<SyncResult> {
        let mut result = SyncResult::new(SyncOperation::Restore, self.options.dry_run);
        let pref_path = &self.config.preference_file;

        if self.options.dry_run {
            BackupManager::check_backup(pref_path)?;
            eprintln!(
                "[DRY RUN] Would restore: {} -> {}",
                BackupManager::backup_path(pref_path).display(),
                pref_path.display()
            );
            result.backup = Some(BackupManager::backup_path(pref_path));
        } else {
            result.backup = Some(BackupManager::restore(pref_path)?);
        }

        Ok(result)
    }
}
