//! Error handling for taxonomy-shapes
//!
//! Rendering itself never fails: every "missing data" condition (an empty
//! reference, an alias that resolves to nothing, a missing taxonomy, a missing
//! targeted term) short-circuits to an empty contribution. The errors in this
//! module belong to the surfaces around rendering:
//!
//! - loading a content fixture for the in-memory store
//! - loading the configuration file
//! - parsing user input on the command line
//!
//! [`ShapeError`] is the strongly-typed error enum; [`ErrorContext`] wraps it
//! with a suggestion and details for display on the terminal, and
//! [`user_friendly_error`] converts any [`anyhow::Error`] into one.
//!
//! # Examples
//!
//! ```rust,no_run
//! use taxonomy_shapes::core::{ErrorContext, ShapeError};
//!
//! let context = ErrorContext::new(ShapeError::UnknownNodeKind {
//!     name: "Widget".to_string(),
//! })
//! .with_suggestion("Use one of: Term, TermItem, TermContentItem, TermPart");
//!
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for taxonomy-shapes operations.
#[derive(Error, Debug, Clone)]
pub enum ShapeError {
    /// A content fixture could not be read.
    #[error("Failed to read content fixture: {path}")]
    FixtureReadError {
        path: String,
        reason: String,
    },

    /// A content fixture is not valid JSON or has the wrong layout.
    #[error("Invalid content fixture {path}: {reason}")]
    FixtureParseError {
        path: String,
        reason: String,
    },

    /// The configuration file is not valid TOML or has unknown values.
    #[error("Invalid configuration file {path}: {reason}")]
    ConfigParseError {
        path: String,
        reason: String,
    },

    /// A node kind name did not match any known shape.
    #[error("Unknown node kind '{name}'")]
    UnknownNodeKind {
        name: String,
    },

    /// A render was requested without a taxonomy id or alias.
    #[error("No taxonomy reference given")]
    MissingReference,

    /// Anything else, with the full cause chain in `message`.
    #[error("{message}")]
    Other {
        message: String,
    },
}

/// A [`ShapeError`] with optional user-facing suggestion and details.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: ShapeError,
    /// What the user can do about it
    pub suggestion: Option<String>,
    /// Extra background on the failure
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(error: ShapeError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] suitable for the terminal.
///
/// Known [`ShapeError`] variants get tailored suggestions. Other errors keep
/// their full `anyhow` cause chain in the message.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(shape_error) = error.downcast_ref::<ShapeError>() {
        return create_error_context(shape_error.clone());
    }

    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(ShapeError::Other {
        message,
    })
}

fn create_error_context(error: ShapeError) -> ErrorContext {
    let context = ErrorContext::new(error.clone());
    match error {
        ShapeError::FixtureReadError {
            reason,
            ..
        } => context
            .with_suggestion("Check that the fixture path exists and is readable")
            .with_details(reason),
        ShapeError::FixtureParseError {
            ..
        } => context.with_suggestion(
            "A fixture is a JSON object with an \"items\" array of content items and an optional \"aliases\" map",
        ),
        ShapeError::ConfigParseError {
            ..
        } => context.with_suggestion(
            "Valid keys are display_type, max_depth and format; check the TOML syntax",
        ),
        ShapeError::UnknownNodeKind {
            ..
        } => context.with_suggestion("Use one of: Term, TermItem, TermContentItem, TermPart"),
        ShapeError::MissingReference => {
            context.with_suggestion("Pass --taxonomy <ID> or --alias <ALIAS>")
        }
        ShapeError::Other {
            ..
        } => context,
    }
}
