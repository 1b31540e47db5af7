use clap::{ArgGroup, Parser};
use snipsync_core::sync::SyncOperation;
use std::path::PathBuf;

/// Devtools Snippet Synchronization Tool
///
/// Sync browser devtools script snippets between the preference file and a directory of .js files
#[derive(Parser, Debug)]
#[command(name = "snipsync")]
#[command(about, long_about = None, version)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .args(["load", "save", "restore"]),
))]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Load snippets from the preference file into the snippet directory
    #[arg(short, long)]
    pub load: bool,

    /// Save snippets from the snippet directory into the preference file
    #[arg(short, long)]
    pub save: bool,

    /// Restore the preference file from its backup
    #[arg(short, long)]
    pub restore: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Preview changes without writing any file (dry-run)
    #[arg(long)]
    pub dry_run: bool,

    /// Keep loading remaining snippets after one fails to format
    #[arg(long)]
    pub keep_going: bool,

    /// Use specific config file (default: ./config.json)
    #[arg(long, value_name = "PATH", env = "SNIPSYNC_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Operation selected by the action flags
    ///
    /// The `action` group guarantees exactly one flag is set.
    pub const fn operation(&self) -> SyncOperation {
        if self.load {
            SyncOperation::Load
        } else if self.save {
            SyncOperation::Save
        } else {
            SyncOperation::Restore
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_flags_select_operation() {
        for (flag, expected) in [
            ("-l", SyncOperation::Load),
            ("-s", SyncOperation::Save),
            ("-r", SyncOperation::Restore),
        ] {
            let cli = Cli::try_parse_from(["snipsync", flag]).unwrap();
            assert_eq!(cli.operation(), expected);
        }
    }

    #[test]
    fn test_actions_are_mutually_exclusive() {
        assert!(Cli::try_parse_from(["snipsync", "--load", "--save"]).is_err());
    }

    #[test]
    fn test_action_is_required() {
        assert!(Cli::try_parse_from(["snipsync", "--verbose"]).is_err());
    }
}
