//! Configuration management for taxonomy-shapes
//!
//! The library itself takes no configuration: every collaborator is passed in
//! explicitly through a [`ShapeContext`](crate::shapes::ShapeContext). The
//! command-line front-end reads a small TOML file of defaults that its flags
//! can override.
//!
//! # Modules
//!
//! - `global` - user-wide defaults for the `taxonomy-shapes` command
//!
//! # Precedence
//!
//! 1. Command-line flags
//! 2. The config file (`--config`, `$TAXONOMY_SHAPES_CONFIG`, or
//!    `~/.taxonomy-shapes/config.toml`)
//! 3. Built-in defaults

mod global;

pub use global::{CONFIG_ENV, OutputFormat, ShapesConfig};
