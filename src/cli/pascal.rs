//! The `pascal` command.

use anyhow::Result;
use clap::Args;

use crate::naming::to_pascal_identifier;

#[derive(Args)]
pub struct PascalCommand {
    /// Display name to convert
    text: String,
}

impl PascalCommand {
    /// Prints the identifier, or an empty line when the input has none.
    pub fn execute(self) -> Result<()> {
        println!("{}", to_pascal_identifier(&self.text).unwrap_or_default());
        Ok(())
    }
}
