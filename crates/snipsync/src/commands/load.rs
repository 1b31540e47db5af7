use anyhow::Context;
use snipsync_core::SnipsyncError;

use crate::commands::CommandOptions;

pub struct Load;

impl Load {
    pub fn execute(options: &CommandOptions) -> anyhow::Result<()> {
        if options.verbose {
            println!("Executing load command");
        }

        let engine = options.engine()?;
        let result = engine.load().context("Load operation failed")?;

        options.report(&result);

        if !result.is_success() {
            return Err(SnipsyncError::Batch(result.errors)).context("Load operation failed");
        }

        Ok(())
    }
}
