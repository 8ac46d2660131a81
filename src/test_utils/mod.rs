//! Test utilities for taxonomy-shapes
//!
//! Builders for sample taxonomies and a one-time logging setup shared by unit
//! and integration tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use taxonomy_shapes::test_utils::{TaxonomyFixture, TermFixture};
//!
//! let store = TaxonomyFixture::new("tax", "Categories", "Category")
//!     .alias("alias:categories")
//!     .term(TermFixture::new("travel", "Travel").child(TermFixture::new("europe", "Europe")))
//!     .store();
//! assert_eq!(store.len(), 1);
//! ```

pub mod fixtures;

pub use fixtures::{TaxonomyFixture, TermFixture};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests, once per process.
///
/// Uses `level` when given, otherwise `RUST_LOG`. With neither, logging stays
/// off.
///
/// ```bash
/// RUST_LOG=taxonomy_shapes=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
