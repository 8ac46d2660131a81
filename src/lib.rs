//! taxonomy-shapes - alternate template names for taxonomy displays
//!
//! A taxonomy is a content item holding an ordered tree of terms. Rendering
//! one produces a tree of shapes, and every shape carries a list of alternate
//! names a template engine can use to find the most specific template for it.
//!
//! # Shapes
//!
//! | Kind              | Represents                                        |
//! |-------------------|---------------------------------------------------|
//! | `Term`            | the taxonomy root, or a targeted term's branch    |
//! | `TermItem`        | one term in the tree, at a level                  |
//! | `TermContentItem` | the content item a term item carries              |
//! | `TermPart`        | the term part of a content item, per display type |
//!
//! Every shape goes through two steps:
//!
//! 1. **populate** - resolve the taxonomy and build the next level of
//!    children. Idempotent, and only ever one level at a time, so a tree is
//!    materialized as far as it is actually rendered.
//! 2. **tag** - derive alternate names and CSS classes from data the shape
//!    already holds. Tagging never fetches or builds anything.
//!
//! # Modules
//!
//! - [`naming`] - identifier normalization (`"foo-ba r"` to `FooBaR`)
//! - [`alternates`] - node kinds and the alternate name builders
//! - [`content`] - content items and the taxonomy part
//! - [`host`] - collaborator traits and an in-memory content store
//! - [`shapes`] - the shape types and their populate/tag logic
//! - [`display`] - per-kind processing table and eager tree walk
//! - [`config`] - defaults for the command-line front-end
//! - [`core`] - error types and user-facing error rendering
//! - [`cli`] - the `taxonomy-shapes` command
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use taxonomy_shapes::display::{RenderOptions, ShapeTable, ShapeView};
//! use taxonomy_shapes::host::MemoryContentStore;
//! use taxonomy_shapes::shapes::{ShapeContext, TermReference, TermShape};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let store = MemoryContentStore::load("content.json".as_ref()).await?;
//! let context = ShapeContext::from_host(Arc::new(store));
//!
//! let mut term = TermShape::new(TermReference::alias("alias:categories"));
//! ShapeTable::new().render_tree(&mut term, &context, &RenderOptions::default()).await;
//!
//! print!("{}", ShapeView::of_term(&term).to_text());
//! # Ok(())
//! # }
//! ```

pub mod alternates;
pub mod cli;
pub mod config;
pub mod content;
pub mod core;
pub mod display;
pub mod host;
pub mod naming;
pub mod shapes;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
