//! The taxonomy root container shape.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;

use super::{Shape, ShapeContext, ShapeMetadata, TaxonomyRef, TermItemShape, build_level};
use crate::alternates::{NodeKind, term_alternates};
use crate::content::ContentItem;
use crate::naming::{html_classify, to_pascal_identifier};

/// How the taxonomy of a render pass is identified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxonomySelector {
    /// A taxonomy content item id
    ContentItemId(String),
    /// A lookup alias, resolved through the host's alias resolver
    Alias(String),
}

impl TaxonomySelector {
    fn value(&self) -> &str {
        match self {
            Self::ContentItemId(id) => id,
            Self::Alias(alias) => alias,
        }
    }
}

/// What a [`TermShape`] renders: a taxonomy, optionally narrowed to the
/// inherited hierarchy of one of its terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermReference {
    pub taxonomy: TaxonomySelector,
    pub term_content_item_id: Option<String>,
}

impl TermReference {
    pub fn content_item_id(id: impl Into<String>) -> Self {
        Self {
            taxonomy: TaxonomySelector::ContentItemId(id.into()),
            term_content_item_id: None,
        }
    }

    pub fn alias(alias: impl Into<String>) -> Self {
        Self {
            taxonomy: TaxonomySelector::Alias(alias.into()),
            term_content_item_id: None,
        }
    }

    /// Render only the inherited hierarchy of `term_content_item_id`.
    #[must_use]
    pub fn with_term(mut self, term_content_item_id: impl Into<String>) -> Self {
        self.term_content_item_id = Some(term_content_item_id.into());
        self
    }

    fn is_empty(&self) -> bool {
        self.taxonomy.value().is_empty()
    }
}

#[derive(Debug, Clone)]
struct ResolvedTerm {
    taxonomy: Arc<TaxonomyRef>,
    differentiator: Option<String>,
}

#[derive(Debug, Clone, Default)]
enum Population {
    #[default]
    Pending,
    /// Resolution short-circuited; the shape contributes nothing
    Absent,
    Resolved(ResolvedTerm),
}

/// Root container for one taxonomy render pass.
#[derive(Debug)]
pub struct TermShape {
    reference: TermReference,
    metadata: ShapeMetadata,
    population: Population,
    items: Vec<TermItemShape>,
}

impl TermShape {
    #[must_use]
    pub fn new(reference: TermReference) -> Self {
        Self {
            reference,
            metadata: ShapeMetadata::new(NodeKind::Term),
            population: Population::Pending,
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn reference(&self) -> &TermReference {
        &self.reference
    }

    /// Level 0 items, in taxonomy order.
    #[must_use]
    pub fn items(&self) -> &[TermItemShape] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [TermItemShape] {
        &mut self.items
    }

    /// The resolved taxonomy, once populated.
    #[must_use]
    pub fn taxonomy(&self) -> Option<&ContentItem> {
        match &self.population {
            Population::Resolved(resolved) => Some(&resolved.taxonomy.content_item),
            _ => None,
        }
    }

    /// The differentiator computed for this pass, if any.
    #[must_use]
    pub fn differentiator(&self) -> Option<&str> {
        match &self.population {
            Population::Resolved(resolved) => resolved.differentiator.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_populated(&self) -> bool {
        !matches!(self.population, Population::Pending)
    }

    async fn resolve(&self, context: &ShapeContext) -> Option<(ResolvedTerm, Vec<ContentItem>)> {
        if self.reference.is_empty() {
            return None;
        }

        let taxonomy_id = match &self.reference.taxonomy {
            TaxonomySelector::Alias(alias) => {
                fetched(context.aliases.resolve_alias(alias).await, "alias resolution")?
            }
            TaxonomySelector::ContentItemId(id) => id.clone(),
        };

        let taxonomy = fetched(context.content.get(&taxonomy_id).await, "taxonomy fetch")?;
        let part = taxonomy.taxonomy_part()?;

        let terms = match self.reference.term_content_item_id.as_deref().filter(|id| !id.is_empty()) {
            Some(term_id) => {
                fetched(
                    context.terms.get_taxonomy_term(&taxonomy.content_item_id, term_id).await,
                    "term lookup",
                )?;
                fetched(
                    context.terms.get_inherited_terms(&taxonomy.content_item_id, term_id).await,
                    "inherited term lookup",
                )?
            }
            None => part.terms,
        };

        // The taxonomy's own name differentiates in both branches, including
        // when a single term's hierarchy is rendered.
        let differentiator =
            to_pascal_identifier(&taxonomy.display_text).filter(|name| !name.is_empty());

        let resolved = ResolvedTerm {
            taxonomy: Arc::new(TaxonomyRef {
                content_item: taxonomy,
                term_content_type: part.term_content_type,
            }),
            differentiator,
        };

        Some((resolved, terms))
    }
}

/// Flatten a host fetch into presence; failures count as absent.
fn fetched<T>(result: anyhow::Result<Option<T>>, what: &str) -> Option<T> {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Treating failed {} as absent: {:#}", what, e);
            None
        }
    }
}

impl Shape for TermShape {
    fn metadata(&self) -> &ShapeMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut ShapeMetadata {
        &mut self.metadata
    }

    fn populate<'a>(&'a mut self, context: &'a ShapeContext) -> BoxFuture<'a, ()> {
        async move {
            if self.is_populated() {
                return;
            }

            let Some((resolved, terms)) = self.resolve(context).await else {
                self.population = Population::Absent;
                return;
            };

            self.items = build_level(
                context,
                terms,
                0,
                &resolved.taxonomy,
                resolved.differentiator.as_deref(),
            )
            .await;
            self.population = Population::Resolved(resolved);
        }
        .boxed()
    }

    fn tag_alternates(&mut self) {
        if !self.reference.is_empty() {
            self.metadata.classes.add("term");
        }

        let Population::Resolved(resolved) = &self.population else {
            return;
        };

        let content_type = &resolved.taxonomy.term_content_type;
        let differentiator = resolved.differentiator.as_deref();

        if let Some(differentiator) = differentiator {
            self.metadata.classes.add(html_classify(&format!("term-{differentiator}")));
        }
        self.metadata.classes.add(html_classify(&format!("term-{content_type}")));

        self.metadata.alternates.extend(term_alternates(content_type, differentiator));
    }
}
