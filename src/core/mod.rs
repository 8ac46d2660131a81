//! Core types for taxonomy-shapes
//!
//! Currently this holds the error handling shared by the library and the
//! command-line front-end. See [`error`] for the policy on which conditions
//! are errors and which are silently treated as absent data.

pub mod error;

pub use error::{ErrorContext, ShapeError, user_friendly_error};
