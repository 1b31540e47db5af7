use anyhow::Context;

use crate::commands::CommandOptions;

pub struct Save;

impl Save {
    pub fn execute(options: &CommandOptions) -> anyhow::Result<()> {
        if options.verbose {
            println!("Executing save command");
        }

        let engine = options.engine()?;
        let result = engine.save().context("Save operation failed")?;

        options.report(&result);
        Ok(())
    }
}
