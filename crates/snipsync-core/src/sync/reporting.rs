//! Sync operation reporting and statistics

use std::fmt::Write;

use super::{SyncOperation, SyncResult};

/// Sync operation reporter
pub struct SyncReporter;

impl SyncReporter {
    /// One-line status printed after every successful run
    #[must_use]
    pub fn status_line(result: &SyncResult) -> String {
        let prefix = if result.dry_run { "[DRY RUN] " } else { "" };

        match result.operation {
            SyncOperation::Load => {
                format!("{prefix}✨ Loaded {} snippet(s)", result.loaded())
            }
            SyncOperation::Save => format!("{prefix}✨ Saved {} snippet(s)", result.saved),
            SyncOperation::Restore => format!("{prefix}🔄 Restored preference file"),
        }
    }

    /// Generate a summary report
    #[must_use]
    pub fn generate_summary(result: &SyncResult) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "\n=== {} Summary ===", capitalize(result.operation));

        match result.operation {
            SyncOperation::Load => {
                let _ = writeln!(output, "Created:   {}", result.created);
                let _ = writeln!(output, "Updated:   {}", result.updated);
                let _ = writeln!(output, "Unchanged: {}", result.unchanged);
            }
            SyncOperation::Save => {
                let _ = writeln!(output, "Saved:     {}", result.saved);
            }
            SyncOperation::Restore => {}
        }

        if let Some(backup) = &result.backup {
            let _ = writeln!(output, "Backup:    {}", backup.display());
        }

        if !result.errors.is_empty() {
            let _ = writeln!(output, "\nErrors ({}):", result.errors.len());
            for error in &result.errors {
                let _ = writeln!(output, "  - {error}");
            }
        }

        if result.is_success() {
            output.push_str("Status: ✓ Success\n");
        } else {
            output.push_str("Status: ✗ Completed with errors\n");
        }

        output
    }
}

fn capitalize(operation: SyncOperation) -> &'static str {
    match operation {
        SyncOperation::Load => "Load",
        SyncOperation::Save => "Save",
        SyncOperation::Restore => "Restore",
    }
}
