//! User configuration for the `taxonomy-shapes` command.
//!
//! Lookup order:
//!
//! 1. an explicit path (`--config`), which must exist
//! 2. `$TAXONOMY_SHAPES_CONFIG`
//! 3. `~/.taxonomy-shapes/config.toml` (`%LOCALAPPDATA%\taxonomy-shapes` on Windows)
//!
//! A missing file in steps 2 and 3 falls back to [`ShapesConfig::default`].
//!
//! ```toml
//! display_type = "Summary"
//! max_depth = 2
//! format = "json"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use tokio::fs;

use crate::core::ShapeError;

/// Environment variable naming an alternate config file.
pub const CONFIG_ENV: &str = "TAXONOMY_SHAPES_CONFIG";

/// How the `render` command prints a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Defaults for the `taxonomy-shapes` command.
///
/// Every key is optional; unknown keys are rejected so typos surface as
/// [`ShapeError::ConfigParseError`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShapesConfig {
    /// Display type used for term part alternates
    #[serde(default = "default_display_type")]
    pub display_type: String,

    /// Deepest level the eager render walk processes
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Output format of `render`
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_display_type() -> String {
    "Detail".to_string()
}

impl Default for ShapesConfig {
    fn default() -> Self {
        Self {
            display_type: default_display_type(),
            max_depth: None,
            format: OutputFormat::default(),
        }
    }
}

impl ShapesConfig {
    /// Load from an explicit path, the environment, or the default location.
    ///
    /// # Arguments
    ///
    /// * `path` - explicit config file (from `--config`); it must exist
    ///
    /// # Errors
    ///
    /// Fails when the explicit file is missing or unreadable, when any file
    /// found is not valid config, or when the home directory is unknown.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use taxonomy_shapes::config::ShapesConfig;
    ///
    /// # async fn example() -> anyhow::Result<()> {
    /// let config = ShapesConfig::load_with_optional(None).await?;
    /// println!("display type: {}", config.display_type);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from(&path).await;
        }

        let path = match std::env::var_os(CONFIG_ENV) {
            Some(value) => PathBuf::from(value),
            None => Self::default_path()?,
        };

        if path.exists() {
            Self::load_from(&path).await
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load and parse one config file.
    ///
    /// # Errors
    ///
    /// Returns a read error with the path as context, or
    /// [`ShapeError::ConfigParseError`] for invalid TOML and unknown keys.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = toml::from_str(&content).map_err(|e| ShapeError::ConfigParseError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// The per-user config location.
    ///
    /// - Unix/macOS: `~/.taxonomy-shapes/config.toml`
    /// - Windows: `%LOCALAPPDATA%\taxonomy-shapes\config.toml`
    ///
    /// # Errors
    ///
    /// Fails when the home (or local data) directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?
                .join("taxonomy-shapes")
        } else {
            dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
                .join(".taxonomy-shapes")
        };

        Ok(config_dir.join("config.toml"))
    }
}
