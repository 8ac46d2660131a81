//! Term item and term content item shapes.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;

use super::{
    Shape, ShapeContext, ShapeMetadata, TaxonomyRef, TermItemArgs, TermPartShape, build_level,
};
use crate::alternates::{NodeKind, level_alternates};
use crate::content::ContentItem;
use crate::naming::html_classify;

/// One term in the rendered tree.
///
/// Created with its raw child terms attached. The child shapes are built the
/// first time the item is populated, one level deeper than the item itself.
#[derive(Debug)]
pub struct TermItemShape {
    metadata: ShapeMetadata,
    level: usize,
    term_content_item: Arc<ContentItem>,
    terms: Vec<ContentItem>,
    taxonomy: Arc<TaxonomyRef>,
    differentiator: Option<String>,
    content: TermContentItemShape,
    items: Vec<TermItemShape>,
    populated: bool,
}

impl TermItemShape {
    #[must_use]
    pub fn new(args: TermItemArgs) -> Self {
        let content = TermContentItemShape::new(
            Arc::clone(&args.term_content_item),
            args.level,
            args.differentiator.clone(),
        );

        Self {
            metadata: ShapeMetadata::new(NodeKind::TermItem),
            level: args.level,
            term_content_item: args.term_content_item,
            terms: args.terms,
            taxonomy: args.taxonomy,
            differentiator: args.differentiator,
            content,
            items: Vec::new(),
            populated: false,
        }
    }

    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    #[must_use]
    pub fn term_content_item(&self) -> &ContentItem {
        &self.term_content_item
    }

    /// Raw child terms waiting to be built.
    #[must_use]
    pub fn terms(&self) -> &[ContentItem] {
        &self.terms
    }

    #[must_use]
    pub fn taxonomy(&self) -> &ContentItem {
        &self.taxonomy.content_item
    }

    #[must_use]
    pub fn differentiator(&self) -> Option<&str> {
        self.differentiator.as_deref()
    }

    /// Child shapes built so far; empty until the item is populated.
    #[must_use]
    pub fn items(&self) -> &[TermItemShape] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [TermItemShape] {
        &mut self.items
    }

    /// Shape for this item's own content item.
    #[must_use]
    pub fn content(&self) -> &TermContentItemShape {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut TermContentItemShape {
        &mut self.content
    }

    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.populated
    }
}

impl Shape for TermItemShape {
    fn metadata(&self) -> &ShapeMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut ShapeMetadata {
        &mut self.metadata
    }

    fn populate<'a>(&'a mut self, context: &'a ShapeContext) -> BoxFuture<'a, ()> {
        async move {
            if self.populated {
                return;
            }
            self.populated = true;

            let children = self.terms.clone();
            let items = build_level(
                context,
                children,
                self.level + 1,
                &self.taxonomy,
                self.differentiator.as_deref(),
            )
            .await;
            self.items.extend(items);
        }
        .boxed()
    }

    fn tag_alternates(&mut self) {
        let content_type = &self.taxonomy.term_content_type;
        let differentiator = self.differentiator.as_deref();

        if let Some(differentiator) = differentiator {
            self.metadata.classes.add(html_classify(&format!("term-item-{differentiator}")));
        }
        self.metadata.classes.add(html_classify(&format!("term-item-{content_type}")));

        self.metadata.alternates.extend(level_alternates(
            NodeKind::TermItem,
            content_type,
            self.level,
            differentiator,
        ));
    }
}

/// The content item carried by a term item.
///
/// Its alternates use the content item's own content type rather than the
/// taxonomy's term content type.
#[derive(Debug)]
pub struct TermContentItemShape {
    metadata: ShapeMetadata,
    level: usize,
    term_content_item: Arc<ContentItem>,
    differentiator: Option<String>,
    part: Option<TermPartShape>,
}

impl TermContentItemShape {
    #[must_use]
    pub fn new(
        term_content_item: Arc<ContentItem>,
        level: usize,
        differentiator: Option<String>,
    ) -> Self {
        Self {
            metadata: ShapeMetadata::new(NodeKind::TermContentItem),
            level,
            term_content_item,
            differentiator,
            part: None,
        }
    }

    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    #[must_use]
    pub fn term_content_item(&self) -> &ContentItem {
        &self.term_content_item
    }

    /// The term part shape, once one has been attached.
    #[must_use]
    pub fn part(&self) -> Option<&TermPartShape> {
        self.part.as_ref()
    }

    /// Attach a term part shape for `display_type`, keeping an existing one.
    pub fn attach_part(&mut self, display_type: &str) -> &mut TermPartShape {
        let item = &self.term_content_item;
        self.part.get_or_insert_with(|| TermPartShape::new(&item.content_type, display_type))
    }
}

impl Shape for TermContentItemShape {
    fn metadata(&self) -> &ShapeMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut ShapeMetadata {
        &mut self.metadata
    }

    fn tag_alternates(&mut self) {
        self.metadata.alternates.extend(level_alternates(
            NodeKind::TermContentItem,
            &self.term_content_item.content_type,
            self.level,
            self.differentiator.as_deref(),
        ));
    }
}
