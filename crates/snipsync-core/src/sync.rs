//! Load, save, and restore orchestration
//!
//! This module implements the three sync operations:
//! - load: preference file → one formatted `.js` file per snippet
//! - save: snippet files → preference file, after taking a backup
//! - restore: backup → preference file
//!
//! Each invocation runs exactly one operation; no state is kept between runs.

mod actions;
mod diff;
mod executor;
mod orchestrator;
mod reporting;

use std::path::PathBuf;

pub use actions::{SnippetAction, SnippetActionResolver};
pub use diff::DiffGenerator;
pub use executor::SnippetWriter;
pub use orchestrator::SyncEngine;
pub use reporting::SyncReporter;

/// The operation a run performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOperation {
    /// Preference file → snippet directory
    Load,
    /// Snippet directory → preference file
    Save,
    /// Backup → preference file
    Restore,
}

/// What to do when one snippet fails to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failing snippet; files already written stay
    #[default]
    FailFast,
    /// Write every snippet that can be written, then report all failures
    KeepGoing,
}

/// Options shared by every operation
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Report what would change without touching any file
    pub dry_run: bool,
    /// Print a diff for snippet files that would change (dry run only)
    pub show_diff: bool,
    /// Behavior when a snippet fails to load
    pub failure_policy: FailurePolicy,
}

/// Synchronization result with statistics
#[derive(Debug, Clone)]
pub struct SyncResult {
    /// Operation that produced this result
    pub operation: SyncOperation,
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Snippet files created
    pub created: usize,
    /// Snippet files rewritten with different content
    pub updated: usize,
    /// Snippet files already up to date
    pub unchanged: usize,
    /// Snippets packed into the preference file
    pub saved: usize,
    /// Backup file written or consumed
    pub backup: Option<PathBuf>,
    /// Per-snippet errors (only collected with [`FailurePolicy::KeepGoing`])
    pub errors: Vec<String>,
}

impl SyncResult {
    /// Empty result for `operation`
    #[must_use]
    pub const fn new(operation: SyncOperation, dry_run: bool) -> Self {
        Self {
            operation,
            dry_run,
            created: 0,
            updated: 0,
            unchanged: 0,
            saved: 0,
            backup: None,
            errors: Vec::new(),
        }
    }

    /// Snippets loaded into the directory (including unchanged ones)
    #[must_use]
    pub const fn loaded(&self) -> usize {
        self.created + self.updated + self.unchanged
    }

    /// Whether the run finished without errors
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod integration_tests {
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;

    use super::*;
    use crate::backup::BackupManager;
    use crate::config::Config;
    use crate::error::SnipsyncError;
    use crate::preferences::PreferenceStore;
    use crate::snippets::Snippet;

    const FOO_PREF: &str = r#"{"devtools":{"preferences":{"scriptSnippets":"[{\"name\":\"foo\",\"content\":\"let x=1\"}]"}}}"#;

    fn setup(pref: &str) -> (TempDir, Config) {
        let tmp = TempDir::new().unwrap();
        let pref_path = tmp.path().join("pref.json");
        fs::write(&pref_path, pref).unwrap();
        let config = Config::new(pref_path, tmp.path().join("snippets"));
        (tmp, config)
    }

    fn engine(config: &Config) -> SyncEngine {
        SyncEngine::new(config.clone(), SyncOptions::default())
    }

    fn snippet_files(dir: &Path) -> Vec<(String, String)> {
        let mut files: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| {
                let e = e.unwrap();
                (
                    e.file_name().to_string_lossy().into_owned(),
                    fs::read_to_string(e.path()).unwrap(),
                )
            })
            .collect();
        files.sort();
        files
    }

    #[test]
    fn test_load_example_scenario() {
        let (_tmp, config) = setup(FOO_PREF);

        let result = engine(&config).load().unwrap();

        assert_eq!(result.loaded(), 1);
        assert_eq!(result.created, 1);
        let content = fs::read_to_string(config.snippet_dir.join("foo.js")).unwrap();
        assert!(content.contains("let x = 1;"));
    }

    #[test]
    fn test_load_without_snippet_field() {
        let (_tmp, config) = setup(r#"{"devtools":{"preferences":{}}}"#);

        let result = engine(&config).load().unwrap();

        assert_eq!(result.loaded(), 0);
        assert!(config.snippet_dir.is_dir());
    }

    #[test]
    fn test_load_is_idempotent() {
        let (_tmp, config) = setup(
            r#"{"devtools":{"preferences":{"scriptSnippets":"[{\"name\":\"a\",\"content\":\"const a = [1,2,3].map(x=>x*2)\"},{\"name\":\"b\",\"content\":\"console.log(\\\"b\\\")\"}]"}}}"#,
        );

        engine(&config).load().unwrap();
        let first = snippet_files(&config.snippet_dir);
        let second_result = engine(&config).load().unwrap();
        let second = snippet_files(&config.snippet_dir);

        assert_eq!(first, second);
        assert_eq!(second_result.unchanged, 2);
        assert_eq!(second_result.created, 0);
    }

    #[test]
    fn test_load_fail_fast_stops_at_first_error() {
        let (_tmp, config) = setup(
            r#"{"devtools":{"preferences":{"scriptSnippets":"[{\"name\":\"good\",\"content\":\"1\"},{\"name\":\"bad\",\"content\":\"let = ;\"},{\"name\":\"later\",\"content\":\"2\"}]"}}}"#,
        );

        let err = engine(&config).load().unwrap_err();

        assert!(matches!(err, SnipsyncError::Format { .. }));
        assert!(config.snippet_dir.join("good.js").exists());
        assert!(!config.snippet_dir.join("bad.js").exists());
        assert!(!config.snippet_dir.join("later.js").exists());
    }

    #[test]
    fn test_load_keep_going_reports_all_failures() {
        let (_tmp, config) = setup(
            r#"{"devtools":{"preferences":{"scriptSnippets":"[{\"name\":\"bad1\",\"content\":\"let = ;\"},{\"name\":\"good\",\"content\":\"1\"},{\"name\":\"bad2\",\"content\":\"}{\"}]"}}}"#,
        );
        let options = SyncOptions {
            failure_policy: FailurePolicy::KeepGoing,
            ..SyncOptions::default()
        };

        let result = SyncEngine::new(config.clone(), options).load().unwrap();

        assert!(!result.is_success());
        assert_eq!(result.created, 1);
        assert_eq!(result.errors.len(), 2);
        assert!(result.errors[0].contains("bad1"));
        assert!(result.errors[1].contains("bad2"));
        assert!(config.snippet_dir.join("good.js").exists());
        assert!(!config.snippet_dir.join("bad1.js").exists());
    }

    #[test]
    fn test_load_then_save_keeps_comments() {
        let (_tmp, config) = setup(
            r#"{"devtools":{"preferences":{"scriptSnippets":"[{\"name\":\"token\",\"content\":\"// fetch a token\\nlet token = 1 // keep me\\nconst ids = [\\n  1, // first\\n  2,\\n]\\ncall(/* arg */ token)\"}]"}}}"#,
        );

        engine(&config).load().unwrap();
        engine(&config).save().unwrap();

        let doc = PreferenceStore::read(&config.preference_file).unwrap();
        let saved = PreferenceStore::extract_snippets(&doc).unwrap();
        assert_eq!(saved.len(), 1);
        for comment in ["// fetch a token", "// keep me", "// first", "/* arg */"] {
            assert!(saved[0].content.contains(comment), "lost {comment}: {}", saved[0].content);
        }
    }

    #[test]
    fn test_load_dry_run_writes_nothing() {
        let (_tmp, config) = setup(FOO_PREF);
        let options = SyncOptions {
            dry_run: true,
            ..SyncOptions::default()
        };

        let result = SyncEngine::new(config.clone(), options).load().unwrap();

        assert_eq!(result.created, 1);
        assert!(!config.snippet_dir.exists());
    }

    #[test]
    fn test_load_malformed_preference() {
        let (_tmp, config) = setup("{ nope");

        let err = engine(&config).load().unwrap_err();

        assert!(matches!(err, SnipsyncError::Parse { .. }));
    }

    #[test]
    fn test_save_packs_directory_and_backs_up() {
        let (_tmp, config) = setup(FOO_PREF);
        fs::create_dir(&config.snippet_dir).unwrap();
        fs::write(config.snippet_dir.join("b.js"), "b();\n").unwrap();
        fs::write(config.snippet_dir.join("a.js"), "a();\n").unwrap();
        fs::write(config.snippet_dir.join("notes.md"), "skip").unwrap();

        let result = engine(&config).save().unwrap();

        assert_eq!(result.saved, 2);
        let backup = BackupManager::backup_path(&config.preference_file);
        assert_eq!(result.backup.as_deref(), Some(backup.as_path()));
        assert_eq!(fs::read_to_string(&backup).unwrap(), FOO_PREF);

        let doc = PreferenceStore::read(&config.preference_file).unwrap();
        assert_eq!(
            PreferenceStore::extract_snippets(&doc).unwrap(),
            vec![Snippet::new("a", "a();\n"), Snippet::new("b", "b();\n")]
        );
    }

    #[test]
    fn test_save_load_save_is_stable() {
        let (_tmp, config) = setup(FOO_PREF);

        engine(&config).load().unwrap();
        engine(&config).save().unwrap();
        let first = fs::read(&config.preference_file).unwrap();

        engine(&config).load().unwrap();
        engine(&config).save().unwrap();
        let second = fs::read(&config.preference_file).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_save_then_restore_reverts() {
        let (_tmp, config) = setup(FOO_PREF);
        fs::create_dir(&config.snippet_dir).unwrap();
        fs::write(config.snippet_dir.join("new.js"), "n();\n").unwrap();

        engine(&config).save().unwrap();
        assert_ne!(fs::read_to_string(&config.preference_file).unwrap(), FOO_PREF);

        engine(&config).restore().unwrap();
        assert_eq!(fs::read_to_string(&config.preference_file).unwrap(), FOO_PREF);
    }

    #[test]
    fn test_save_without_preferences_object() {
        let (_tmp, config) = setup(r#"{"devtools":{}}"#);
        fs::create_dir(&config.snippet_dir).unwrap();

        let err = engine(&config).save().unwrap_err();

        assert!(matches!(err, SnipsyncError::Structure(_)));
        assert_eq!(
            fs::read_to_string(&config.preference_file).unwrap(),
            r#"{"devtools":{}}"#
        );
        // Backup is taken before anything else
        assert!(BackupManager::backup_path(&config.preference_file).exists());
    }

    #[test]
    fn test_save_missing_snippet_dir() {
        let (_tmp, config) = setup(FOO_PREF);

        let err = engine(&config).save().unwrap_err();

        assert!(matches!(err, SnipsyncError::Io { .. }));
        assert_eq!(fs::read_to_string(&config.preference_file).unwrap(), FOO_PREF);
    }

    #[test]
    fn test_save_dry_run_writes_nothing() {
        let (_tmp, config) = setup(FOO_PREF);
        fs::create_dir(&config.snippet_dir).unwrap();
        fs::write(config.snippet_dir.join("x.js"), "x();\n").unwrap();
        let options = SyncOptions {
            dry_run: true,
            ..SyncOptions::default()
        };

        let result = SyncEngine::new(config.clone(), options).save().unwrap();

        assert_eq!(result.saved, 1);
        assert_eq!(fs::read_to_string(&config.preference_file).unwrap(), FOO_PREF);
        assert!(!BackupManager::backup_path(&config.preference_file).exists());
    }

    #[test]
    fn test_restore_without_backup() {
        let (_tmp, config) = setup(FOO_PREF);

        let err = engine(&config).restore().unwrap_err();

        assert!(matches!(err, SnipsyncError::Io { .. }));
        assert_eq!(fs::read_to_string(&config.preference_file).unwrap(), FOO_PREF);
    }
}
