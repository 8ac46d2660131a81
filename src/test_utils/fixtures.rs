//! Sample taxonomies for tests

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::content::{ContentItem, TaxonomyPart};
use crate::host::{ContentFixture, MemoryContentStore};

/// A term and its children.
#[derive(Clone, Debug)]
pub struct TermFixture {
    pub content_item_id: String,
    pub display_text: String,
    pub children: Vec<TermFixture>,
}

impl TermFixture {
    pub fn new(content_item_id: &str, display_text: &str) -> Self {
        Self {
            content_item_id: content_item_id.to_string(),
            display_text: display_text.to_string(),
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: TermFixture) -> Self {
        self.children.push(child);
        self
    }

    fn to_content_item(&self, content_type: &str) -> ContentItem {
        let mut item = ContentItem::new(&self.content_item_id, content_type, &self.display_text);
        if !self.children.is_empty() {
            item.set_child_terms(
                self.children.iter().map(|child| child.to_content_item(content_type)).collect(),
            );
        }
        item
    }
}

/// A taxonomy content item with its terms and lookup aliases.
#[derive(Clone, Debug)]
pub struct TaxonomyFixture {
    pub content_item_id: String,
    pub display_text: String,
    pub term_content_type: String,
    pub terms: Vec<TermFixture>,
    pub aliases: Vec<String>,
}

impl TaxonomyFixture {
    pub fn new(content_item_id: &str, display_text: &str, term_content_type: &str) -> Self {
        Self {
            content_item_id: content_item_id.to_string(),
            display_text: display_text.to_string(),
            term_content_type: term_content_type.to_string(),
            terms: Vec::new(),
            aliases: Vec::new(),
        }
    }

    /// `Categories` (alias `alias:categories`):
    ///
    /// ```text
    /// Travel
    ///   Europe
    ///     Paris
    ///   Asia
    /// Food
    /// News
    /// ```
    pub fn categories() -> Self {
        Self::new("4x9taxonomy", "Categories", "Category")
            .alias("alias:categories")
            .term(
                TermFixture::new("travel", "Travel")
                    .child(TermFixture::new("europe", "Europe").child(TermFixture::new("paris", "Paris")))
                    .child(TermFixture::new("asia", "Asia")),
            )
            .term(TermFixture::new("food", "Food"))
            .term(TermFixture::new("news", "News"))
    }

    pub fn term(mut self, term: TermFixture) -> Self {
        self.terms.push(term);
        self
    }

    pub fn alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    pub fn to_content_item(&self) -> ContentItem {
        let terms =
            self.terms.iter().map(|term| term.to_content_item(&self.term_content_type)).collect();

        let mut item = ContentItem::new(&self.content_item_id, "Taxonomy", &self.display_text);
        item.set_taxonomy_part(&TaxonomyPart::new(&self.term_content_type, terms));
        item
    }

    pub fn fixture(&self) -> ContentFixture {
        ContentFixture {
            aliases: self
                .aliases
                .iter()
                .map(|alias| (alias.clone(), self.content_item_id.clone()))
                .collect(),
            items: vec![self.to_content_item()],
        }
    }

    pub fn store(&self) -> MemoryContentStore {
        MemoryContentStore::from_fixture(self.fixture())
    }

    /// Write the fixture as `content.json` in `dir`.
    pub fn write_json(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join("content.json");
        let json = serde_json::to_string_pretty(&self.fixture())
            .context("Failed to serialize content fixture")?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write fixture: {}", path.display()))?;
        Ok(path)
    }
}
