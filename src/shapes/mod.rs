//! Typed rendered nodes and the term tree materializer.
//!
//! A render pass starts from a [`TermShape`] pointing at a taxonomy (by id or
//! alias). Populating it resolves the taxonomy, computes the differentiator
//! once, and builds the first level of [`TermItemShape`]s. Deeper levels are
//! only built when a term item is itself populated, so branches the host never
//! renders are never materialized:
//!
//! ```text
//! TermShape ── populate ──▶ level 0 TermItemShape ×N
//!                              └─ populate ──▶ level 1 TermItemShape ×M
//!                                                 └─ ...
//! ```
//!
//! Every shape has two phases:
//!
//! - `populate` computes and caches data; it may suspend on host fetches and
//!   is a no-op the second time
//! - `tag_alternates` reads only cached data and adds alternate names and
//!   classes to the shape's [`ShapeMetadata`]; it never populates
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use taxonomy_shapes::host::MemoryContentStore;
//! use taxonomy_shapes::shapes::{Shape, ShapeContext, TermReference, TermShape};
//!
//! # async fn example(store: MemoryContentStore) {
//! let context = ShapeContext::from_host(Arc::new(store));
//! let mut term = TermShape::new(TermReference::alias("alias:categories"));
//!
//! term.populate(&context).await;
//! term.tag_alternates();
//!
//! for item in term.items() {
//!     println!("{} at level {}", item.term_content_item().display_text, item.level());
//! }
//! # }
//! ```

mod term;
mod term_item;
mod term_part;

pub use term::{TaxonomySelector, TermReference, TermShape};
pub use term_item::{TermContentItemShape, TermItemShape};
pub use term_part::TermPartShape;

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde::Serialize;

use crate::alternates::{AlternateNames, Classes, NodeKind};
use crate::content::ContentItem;
use crate::host::{AliasResolver, ContentStore, TermLookup};

/// Presentation data attached to every shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShapeMetadata {
    pub kind: NodeKind,
    pub alternates: AlternateNames,
    pub classes: Classes,
}

impl ShapeMetadata {
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            alternates: AlternateNames::new(),
            classes: Classes::new(),
        }
    }
}

/// The two-phase contract shared by every rendered node.
pub trait Shape: Send {
    fn kind(&self) -> NodeKind {
        self.metadata().kind
    }

    fn metadata(&self) -> &ShapeMetadata;

    fn metadata_mut(&mut self) -> &mut ShapeMetadata;

    /// Compute and cache the data this shape needs. Runs at most once.
    fn populate<'a>(&'a mut self, _context: &'a ShapeContext) -> BoxFuture<'a, ()> {
        futures::future::ready(()).boxed()
    }

    /// Add alternates and classes from cached data.
    fn tag_alternates(&mut self);
}

/// A taxonomy content item together with its term content type.
///
/// Shared by every node of one render pass as the back-reference to the
/// enclosing taxonomy.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxonomyRef {
    pub content_item: ContentItem,
    pub term_content_type: String,
}

/// Arguments for creating a term item shape.
#[derive(Debug, Clone)]
pub struct TermItemArgs {
    pub level: usize,
    pub term_content_item: Arc<ContentItem>,
    /// Raw child terms, built into shapes only when the item is populated
    pub terms: Vec<ContentItem>,
    pub taxonomy: Arc<TaxonomyRef>,
    pub differentiator: Option<String>,
}

impl TermItemArgs {
    /// Arguments for `term` at `level`, with its children read from its content.
    pub(crate) fn for_term(
        term: ContentItem,
        level: usize,
        taxonomy: &Arc<TaxonomyRef>,
        differentiator: Option<&str>,
    ) -> Self {
        let terms = term.child_terms();
        Self {
            level,
            term_content_item: Arc::new(term),
            terms,
            taxonomy: Arc::clone(taxonomy),
            differentiator: differentiator.map(str::to_string),
        }
    }
}

/// Creates rendered nodes for the materializer.
pub trait ShapeFactory: Send + Sync {
    fn create_term_item(&self, args: TermItemArgs) -> BoxFuture<'_, TermItemShape>;
}

/// Builds shapes directly, without suspending.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultShapeFactory;

impl ShapeFactory for DefaultShapeFactory {
    fn create_term_item(&self, args: TermItemArgs) -> BoxFuture<'_, TermItemShape> {
        futures::future::ready(TermItemShape::new(args)).boxed()
    }
}

/// The collaborators available to one render pass.
#[derive(Clone)]
pub struct ShapeContext {
    pub content: Arc<dyn ContentStore>,
    pub aliases: Arc<dyn AliasResolver>,
    pub terms: Arc<dyn TermLookup>,
    pub factory: Arc<dyn ShapeFactory>,
}

impl ShapeContext {
    pub fn new(
        content: Arc<dyn ContentStore>,
        aliases: Arc<dyn AliasResolver>,
        terms: Arc<dyn TermLookup>,
    ) -> Self {
        Self {
            content,
            aliases,
            terms,
            factory: Arc::new(DefaultShapeFactory),
        }
    }

    /// Use one host object for every collaborator.
    pub fn from_host<H>(host: Arc<H>) -> Self
    where
        H: ContentStore + AliasResolver + TermLookup + 'static,
    {
        Self::new(host.clone(), host.clone(), host)
    }

    #[must_use]
    pub fn with_factory(mut self, factory: Arc<dyn ShapeFactory>) -> Self {
        self.factory = factory;
        self
    }
}

impl std::fmt::Debug for ShapeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeContext").finish_non_exhaustive()
    }
}

/// Build one shape per term, in input order, through the context's factory.
pub(crate) async fn build_level(
    context: &ShapeContext,
    terms: Vec<ContentItem>,
    level: usize,
    taxonomy: &Arc<TaxonomyRef>,
    differentiator: Option<&str>,
) -> Vec<TermItemShape> {
    let mut items = Vec::with_capacity(terms.len());
    for term in terms {
        tracing::trace!("Building term item '{}' at level {}", term.content_item_id, level);
        let args = TermItemArgs::for_term(term, level, taxonomy, differentiator);
        // Positional append keeps the input's sort order
        items.push(context.factory.create_term_item(args).await);
    }
    items
}
