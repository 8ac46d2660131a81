//! Command-line interface for taxonomy-shapes.
//!
//! The binary drives the library against a JSON content fixture, standing in
//! for the host CMS, so the alternates a taxonomy produces can be inspected
//! directly.
//!
//! # Commands
//!
//! - `render` - materialize a taxonomy tree and print every node's alternates
//! - `alternates` - print the alternates of a single node
//! - `pascal` - print the differentiator for a display name
//!
//! # Example
//!
//! ```bash
//! taxonomy-shapes render content.json --alias alias:categories --depth 1
//! taxonomy-shapes alternates TermItem --content-type Category --level 2 --name "Blog Categories"
//! taxonomy-shapes pascal "foo-ba r"
//! ```

mod alternates;
mod pascal;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::ShapesConfig;

/// Main CLI structure for taxonomy-shapes.
#[derive(Parser)]
#[command(
    name = "taxonomy-shapes",
    about = "Resolve alternate names for taxonomy shapes",
    version,
    long_about = "Materializes taxonomy term trees and prints the alternate template names each rendered node contributes."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Path to a config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Materialize a taxonomy tree and print its alternates
    Render(render::RenderCommand),

    /// Print the alternates of a single node
    Alternates(alternates::AlternatesCommand),

    /// Convert a display name into its differentiator
    Pascal(pascal::PascalCommand),
}

impl Cli {
    /// Set up logging, load configuration, and run the selected command.
    pub async fn execute(self) -> Result<()> {
        self.init_logging();

        let config = ShapesConfig::load_with_optional(self.config.clone()).await?;

        match self.command {
            Commands::Render(cmd) => cmd.execute(&config).await,
            Commands::Alternates(cmd) => cmd.execute(&config),
            Commands::Pascal(cmd) => cmd.execute(),
        }
    }

    /// The log filter implied by the verbosity flags.
    ///
    /// `--verbose` and `--quiet` win over `RUST_LOG`; otherwise `RUST_LOG` is
    /// used when set, and warnings only when it is not.
    #[must_use]
    pub fn log_filter(&self) -> EnvFilter {
        if self.verbose {
            EnvFilter::new("debug")
        } else if self.quiet {
            EnvFilter::new("error")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        }
    }

    fn init_logging(&self) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(self.log_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}
