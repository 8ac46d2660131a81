//! Integration test suite for taxonomy-shapes
//!
//! End-to-end tests covering tree materialization against an in-memory host,
//! concurrent render passes, custom shape factories, and the command-line
//! front-end.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **materialize**: lazy level building, alternates, classes, depth limits
//! - **concurrency**: independent passes over a shared, slow host
//! - **factory**: host-supplied shape factories
//! - **cli**: the `taxonomy-shapes` binary

mod concurrency;
mod factory;
mod materialize;
