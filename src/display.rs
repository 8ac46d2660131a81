//! Shape processing, keyed by node kind.
//!
//! [`ShapeTable`] is the explicit replacement for a host-managed event bus.
//! Processing a shape always runs the same two steps in order:
//!
//! 1. the shape's own `populate` (a no-op for kinds without data to load)
//! 2. the shape's own `tag_alternates`, followed by any hooks registered for
//!    its [`NodeKind`] with [`ShapeTable::describe`]
//!
//! [`ShapeTable::render_tree`] walks a [`TermShape`] the way a host rendering
//! step would, processing each term item and its content item. An optional
//! depth limit stops the walk; items below it are never populated, so their
//! children are never built.
//!
//! # Example
//!
//! ```rust,no_run
//! use taxonomy_shapes::alternates::NodeKind;
//! use taxonomy_shapes::display::{RenderOptions, ShapeTable};
//! use taxonomy_shapes::shapes::{ShapeContext, TermReference, TermShape};
//!
//! # async fn example(context: ShapeContext) {
//! let mut table = ShapeTable::new();
//! table.describe(NodeKind::TermItem, |metadata| {
//!     metadata.classes.add("menu-item");
//! });
//!
//! let mut term = TermShape::new(TermReference::content_item_id("4x9taxonomy"));
//! table.render_tree(&mut term, &context, &RenderOptions::default()).await;
//! # }
//! ```

use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde::Serialize;

use crate::alternates::{AlternateNames, Classes, NodeKind};
use crate::shapes::{Shape, ShapeContext, ShapeMetadata, TermItemShape, TermShape};

/// A host-supplied step run after a shape's own alternates are tagged.
pub type DisplayHook = Arc<dyn Fn(&mut ShapeMetadata) + Send + Sync>;

/// Options for an eager tree walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Deepest level to process; `None` walks the whole tree
    pub max_depth: Option<usize>,
    /// When set, a term part shape is attached and processed for each term
    /// content item
    pub display_type: Option<String>,
}

/// Per-kind processing table.
#[derive(Clone, Default)]
pub struct ShapeTable {
    hooks: HashMap<NodeKind, Vec<DisplayHook>>,
}

impl ShapeTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an extra step for every shape of `kind`.
    pub fn describe<F>(&mut self, kind: NodeKind, hook: F) -> &mut Self
    where
        F: Fn(&mut ShapeMetadata) + Send + Sync + 'static,
    {
        self.hooks.entry(kind).or_default().push(Arc::new(hook));
        self
    }

    /// Populate a shape, then tag it.
    pub async fn process<S: Shape + ?Sized>(&self, shape: &mut S, context: &ShapeContext) {
        shape.populate(context).await;
        self.tag(shape);
    }

    /// Tag a shape from whatever it has cached, without populating it.
    pub fn tag<S: Shape + ?Sized>(&self, shape: &mut S) {
        shape.tag_alternates();
        if let Some(hooks) = self.hooks.get(&shape.kind()) {
            for hook in hooks {
                hook(shape.metadata_mut());
            }
        }
    }

    /// Process a term shape and walk its tree down to `options.max_depth`.
    pub async fn render_tree(
        &self,
        term: &mut TermShape,
        context: &ShapeContext,
        options: &RenderOptions,
    ) {
        self.process(&mut *term, context).await;
        self.render_items(term.items_mut(), context, options).await;
    }

    fn render_items<'a>(
        &'a self,
        items: &'a mut [TermItemShape],
        context: &'a ShapeContext,
        options: &'a RenderOptions,
    ) -> BoxFuture<'a, ()> {
        async move {
            for item in items {
                if options.max_depth.is_some_and(|max| item.level() > max) {
                    continue;
                }

                self.process(&mut *item, context).await;

                let content = item.content_mut();
                self.tag(&mut *content);
                if let Some(display_type) = &options.display_type {
                    self.tag(content.attach_part(display_type));
                }

                self.render_items(item.items_mut(), context, options).await;
            }
        }
        .boxed()
    }
}

impl std::fmt::Debug for ShapeTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kinds: Vec<(NodeKind, usize)> =
            self.hooks.iter().map(|(kind, hooks)| (*kind, hooks.len())).collect();
        f.debug_struct("ShapeTable").field("hooks", &kinds).finish()
    }
}

/// A serializable snapshot of a rendered tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeView {
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_item_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,
    pub alternates: AlternateNames,
    pub classes: Classes,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ShapeView>,
}

impl ShapeView {
    /// Snapshot a term shape and everything materialized beneath it.
    #[must_use]
    pub fn of_term(term: &TermShape) -> Self {
        let taxonomy = term.taxonomy();
        Self {
            kind: NodeKind::Term,
            level: None,
            content_item_id: taxonomy.map(|t| t.content_item_id.clone()),
            display_text: taxonomy.map(|t| t.display_text.clone()),
            alternates: term.metadata().alternates.clone(),
            classes: term.metadata().classes.clone(),
            children: term.items().iter().map(Self::of_item).collect(),
        }
    }

    fn of_item(item: &TermItemShape) -> Self {
        let content = item.content();
        let mut children = vec![Self::leaf(content.metadata(), item)];
        if let Some(part) = content.part() {
            children.push(Self::leaf(part.metadata(), item));
        }
        children.extend(item.items().iter().map(Self::of_item));

        Self {
            kind: NodeKind::TermItem,
            level: Some(item.level()),
            content_item_id: Some(item.term_content_item().content_item_id.clone()),
            display_text: Some(item.term_content_item().display_text.clone()),
            alternates: item.metadata().alternates.clone(),
            classes: item.metadata().classes.clone(),
            children,
        }
    }

    fn leaf(metadata: &ShapeMetadata, item: &TermItemShape) -> Self {
        Self {
            kind: metadata.kind,
            level: Some(item.level()),
            content_item_id: Some(item.term_content_item().content_item_id.clone()),
            display_text: None,
            alternates: metadata.alternates.clone(),
            classes: metadata.classes.clone(),
            children: Vec::new(),
        }
    }

    /// Indented plain-text rendering, one node per line followed by its
    /// alternates.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out, 0);
        out
    }

    fn write_text(&self, out: &mut String, indent: usize) {
        let pad = "  ".repeat(indent);
        let label = self.display_text.as_deref().or(self.content_item_id.as_deref()).unwrap_or("");
        match self.level {
            Some(level) => {
                let _ = writeln!(out, "{pad}{} [level {level}] {label}", self.kind);
            }
            None => {
                let _ = writeln!(out, "{pad}{} {label}", self.kind);
            }
        }
        for alternate in &self.alternates {
            let _ = writeln!(out, "{pad}  - {alternate}");
        }
        for child in &self.children {
            child.write_text(out, indent + 1);
        }
    }
}
