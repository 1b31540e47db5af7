use anyhow::Context;

use crate::commands::CommandOptions;

pub struct Restore;

impl Restore {
    pub fn execute(options: &CommandOptions) -> anyhow::Result<()> {
        if options.verbose {
            println!("Executing restore command");
        }

        let engine = options.engine()?;
        let result = engine.restore().context("Restore operation failed")?;

        options.report(&result);
        Ok(())
    }
}
