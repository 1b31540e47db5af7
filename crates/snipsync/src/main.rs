mod cli;
mod commands;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use commands::CommandOptions;
use snipsync_core::sync::SyncOperation;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Set up Ctrl+C handler for graceful interruption
    ctrlc::set_handler(|| {
        eprintln!("\n\nInterrupted by user (Ctrl+C)");
        std::process::exit(130); // Standard exit code for SIGINT
    })
    .context("Failed to set Ctrl+C handler")?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.verbose {
        println!("Verbose mode enabled");
        println!("Dry run: {}", cli.dry_run);
        println!("Keep going: {}", cli.keep_going);
    }

    let options = CommandOptions::new(
        cli.verbose,
        cli.dry_run,
        cli.keep_going,
        cli.config.as_deref(),
    );

    match cli.operation() {
        SyncOperation::Load => {
            commands::Load::execute(&options).context("Failed to execute load command")?;
        }
        SyncOperation::Save => {
            commands::Save::execute(&options).context("Failed to execute save command")?;
        }
        SyncOperation::Restore => {
            commands::Restore::execute(&options).context("Failed to execute restore command")?;
        }
    }

    Ok(())
}

/// Log to stderr, honoring `RUST_LOG` when set
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
