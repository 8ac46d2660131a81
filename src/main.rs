//! taxonomy-shapes CLI entry point
//!
//! Parses arguments, runs the selected command, and turns failures into a
//! readable error with a suggestion before exiting with status 1.

use anyhow::Result;
use clap::Parser;
use taxonomy_shapes::cli;
use taxonomy_shapes::core::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            user_friendly_error(e).display();
            std::process::exit(1);
        }
    }
}
