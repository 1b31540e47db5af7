//! Diff generation with color-coded output

use std::fmt::Write;
use std::path::Path;

use similar::{ChangeTag, TextDiff};

/// Diff generator for previewing snippet file changes
pub struct DiffGenerator;

impl DiffGenerator {
    /// Generate a color-coded unified diff from `old` to `new`
    #[must_use]
    pub fn generate(old: &str, new: &str, path: &Path) -> String {
        Self::render(old, new, path, true)
    }

    /// Generate the same diff without ANSI colors
    #[must_use]
    pub fn generate_plain(old: &str, new: &str, path: &Path) -> String {
        Self::render(old, new, path, false)
    }

    fn render(old: &str, new: &str, path: &Path, color: bool) -> String {
        const DIFF_CONTEXT_LINES: usize = 3;
        const BOLD: &str = "\x1b[1m";
        const RESET: &str = "\x1b[0m";

        let diff = TextDiff::from_lines(old, new);
        let (bold, reset) = if color { (BOLD, RESET) } else { ("", "") };

        let mut output = String::new();
        let _ = writeln!(output, "{bold}--- {}{reset}", path.display());
        let _ = writeln!(output, "{bold}+++ {}{reset}", path.display());

        for (idx, group) in diff.grouped_ops(DIFF_CONTEXT_LINES).iter().enumerate() {
            if idx > 0 {
                output.push_str("...\n");
            }

            for op in group {
                for change in diff.iter_changes(op) {
                    let (sign, tint) = match change.tag() {
                        ChangeTag::Delete => ("-", "\x1b[31m"), // Red
                        ChangeTag::Insert => ("+", "\x1b[32m"), // Green
                        ChangeTag::Equal => (" ", RESET),
                    };
                    let (tint, reset) = if color { (tint, RESET) } else { ("", "") };

                    let newline = if change.value().ends_with('\n') {
                        ""
                    } else {
                        "\n"
                    };

                    let _ = write!(output, "{tint}{sign}{}{newline}{reset}", change.value());
                }
            }
        }

        output
    }
}
