//! Collaborators owned by the host CMS.
//!
//! The materializer never reaches for ambient services. Everything it needs
//! from the outside world comes through the traits in this module, handed to
//! it inside a [`ShapeContext`](crate::shapes::ShapeContext):
//!
//! - [`AliasResolver`] turns a lookup alias into a content item id
//! - [`ContentStore`] fetches a content item by id
//! - [`TermLookup`] finds terms and their inherited chain inside a taxonomy
//!
//! Every method may suspend. A method returning `Ok(None)` means the data is
//! absent; an `Err` is treated the same way by the materializer, without
//! retries.
//!
//! [`MemoryContentStore`] implements all three over an in-memory map and can
//! be loaded from a JSON fixture:
//!
//! ```json
//! {
//!   "aliases": { "alias:categories": "4x9taxonomy" },
//!   "items": [ { "ContentItemId": "4x9taxonomy", "ContentType": "Taxonomy", "...": "..." } ]
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use futures::FutureExt;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::content::ContentItem;
use crate::core::ShapeError;

/// Resolves a lookup alias to a content item id.
pub trait AliasResolver: Send + Sync {
    /// Look up `alias`.
    ///
    /// Returns `Ok(None)` when no item carries the alias.
    fn resolve_alias<'a>(&'a self, alias: &'a str) -> BoxFuture<'a, Result<Option<String>>>;
}

/// Fetches content items by id.
pub trait ContentStore: Send + Sync {
    /// Fetch the latest version of an item.
    ///
    /// Returns `Ok(None)` when no item has the id.
    fn get<'a>(&'a self, content_item_id: &'a str) -> BoxFuture<'a, Result<Option<ContentItem>>>;
}

/// Term queries scoped to one taxonomy.
pub trait TermLookup: Send + Sync {
    /// Find a term anywhere in the taxonomy's hierarchy.
    ///
    /// # Arguments
    ///
    /// * `taxonomy_content_item_id` - id of the taxonomy content item
    /// * `term_content_item_id` - id of the term to find
    fn get_taxonomy_term<'a>(
        &'a self,
        taxonomy_content_item_id: &'a str,
        term_content_item_id: &'a str,
    ) -> BoxFuture<'a, Result<Option<ContentItem>>>;

    /// The term followed by its ancestors up to the top level of the taxonomy.
    fn get_inherited_terms<'a>(
        &'a self,
        taxonomy_content_item_id: &'a str,
        term_content_item_id: &'a str,
    ) -> BoxFuture<'a, Result<Option<Vec<ContentItem>>>>;
}

/// On-disk layout of a content fixture.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentFixture {
    /// Alias to content item id
    #[serde(default)]
    pub aliases: HashMap<String, String>,
    /// Every content item in the store
    #[serde(default)]
    pub items: Vec<ContentItem>,
}

/// An in-memory content store.
///
/// Items are immutable once inserted into a shared store; each fetch hands
/// out a clone, so concurrent render passes never share mutable state.
#[derive(Debug, Clone, Default)]
pub struct MemoryContentStore {
    items: HashMap<String, ContentItem>,
    aliases: HashMap<String, String>,
}

impl MemoryContentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a parsed fixture.
    #[must_use]
    pub fn from_fixture(fixture: ContentFixture) -> Self {
        let mut store = Self::new();
        for item in fixture.items {
            store.insert(item);
        }
        store.aliases = fixture.aliases;
        store
    }

    /// Load a JSON fixture from disk.
    ///
    /// # Errors
    ///
    /// [`ShapeError::FixtureReadError`] when the file cannot be read and
    /// [`ShapeError::FixtureParseError`] when it is not a valid fixture.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use std::path::Path;
    /// use taxonomy_shapes::host::MemoryContentStore;
    ///
    /// # async fn example() -> anyhow::Result<()> {
    /// let store = MemoryContentStore::load(Path::new("content.json")).await?;
    /// println!("{} items", store.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await.map_err(|e| ShapeError::FixtureReadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let fixture: ContentFixture =
            serde_json::from_str(&content).map_err(|e| ShapeError::FixtureParseError {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        tracing::debug!(
            "Loaded {} content items and {} aliases from {}",
            fixture.items.len(),
            fixture.aliases.len(),
            path.display()
        );

        Ok(Self::from_fixture(fixture))
    }

    /// Insert or replace an item, keyed by its id.
    pub fn insert(&mut self, item: ContentItem) {
        self.items.insert(item.content_item_id.clone(), item);
    }

    /// Make `alias` resolve to `content_item_id`, replacing any earlier
    /// target.
    ///
    /// # Arguments
    ///
    /// * `alias` - lookup alias, e.g. `alias:categories`
    /// * `content_item_id` - id of the item the alias points at
    pub fn add_alias(&mut self, alias: impl Into<String>, content_item_id: impl Into<String>) {
        self.aliases.insert(alias.into(), content_item_id.into());
    }

    /// Number of stored items. Nested terms are not counted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn taxonomy_part(&self, taxonomy_content_item_id: &str) -> Option<crate::content::TaxonomyPart> {
        self.items.get(taxonomy_content_item_id)?.taxonomy_part()
    }
}

impl AliasResolver for MemoryContentStore {
    fn resolve_alias<'a>(&'a self, alias: &'a str) -> BoxFuture<'a, Result<Option<String>>> {
        async move { Ok(self.aliases.get(alias).cloned()) }.boxed()
    }
}

impl ContentStore for MemoryContentStore {
    fn get<'a>(&'a self, content_item_id: &'a str) -> BoxFuture<'a, Result<Option<ContentItem>>> {
        async move { Ok(self.items.get(content_item_id).cloned()) }.boxed()
    }
}

impl TermLookup for MemoryContentStore {
    fn get_taxonomy_term<'a>(
        &'a self,
        taxonomy_content_item_id: &'a str,
        term_content_item_id: &'a str,
    ) -> BoxFuture<'a, Result<Option<ContentItem>>> {
        async move {
            Ok(self
                .taxonomy_part(taxonomy_content_item_id)
                .and_then(|part| part.find_term(term_content_item_id)))
        }
        .boxed()
    }

    fn get_inherited_terms<'a>(
        &'a self,
        taxonomy_content_item_id: &'a str,
        term_content_item_id: &'a str,
    ) -> BoxFuture<'a, Result<Option<Vec<ContentItem>>>> {
        async move {
            Ok(self
                .taxonomy_part(taxonomy_content_item_id)
                .and_then(|part| part.term_hierarchy(term_content_item_id)))
        }
        .boxed()
    }
}
