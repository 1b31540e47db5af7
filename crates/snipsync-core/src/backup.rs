//! Backup and restore of the preference file
//!
//! The backup lives next to the preference file as `<file>.bak` and is a
//! byte-for-byte copy. Restoring does not delete it.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SnipsyncError};

/// Suffix appended to the preference file name
pub const BACKUP_SUFFIX: &str = ".bak";

/// Preference file backup operations
pub struct BackupManager;

impl BackupManager {
    /// Sibling backup path for `path`
    #[must_use]
    pub fn backup_path(path: &Path) -> PathBuf {
        let mut name = OsString::from(path.as_os_str());
        name.push(BACKUP_SUFFIX);
        PathBuf::from(name)
    }

    /// Copy `path` over its backup
    ///
    /// # Errors
    ///
    /// Returns [`SnipsyncError::Io`] if the source cannot be read or the
    /// backup cannot be written.
    pub fn backup(path: &Path) -> Result<PathBuf> {
        let backup = Self::backup_path(path);
        tracing::info!(from = %path.display(), to = %backup.display(), "backing up preference file");
        copy_file(path, &backup)?;
        Ok(backup)
    }

    /// Copy the backup of `path` back onto `path`
    ///
    /// # Errors
    ///
    /// Returns [`SnipsyncError::Io`] if no backup exists; `path` is left
    /// untouched in that case.
    pub fn restore(path: &Path) -> Result<PathBuf> {
        let backup = Self::backup_path(path);
        Self::check_backup(path)?;
        tracing::info!(from = %backup.display(), to = %path.display(), "restoring preference file");
        copy_file(&backup, path)?;
        Ok(backup)
    }

    /// Fail unless a backup of `path` exists
    ///
    /// # Errors
    ///
    /// Returns [`SnipsyncError::Io`] with `NotFound` if the backup is missing.
    pub fn check_backup(path: &Path) -> Result<()> {
        let backup = Self::backup_path(path);
        if backup.is_file() {
            Ok(())
        } else {
            Err(SnipsyncError::io(
                &backup,
                std::io::Error::new(std::io::ErrorKind::NotFound, "backup file not found"),
            ))
        }
    }
}

fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    fs::copy(source, dest).map_err(|e| SnipsyncError::io(source, e))?;
    Ok(())
}
