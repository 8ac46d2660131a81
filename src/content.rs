//! Typed content model for taxonomies and their terms.
//!
//! Content items come from the host's content store as JSON documents. The
//! well-known header fields are typed; everything else (parts, fields, nested
//! terms) stays in [`ContentItem::content`]:
//!
//! ```json
//! {
//!   "ContentItemId": "4x9taxonomy",
//!   "ContentType": "Taxonomy",
//!   "DisplayText": "Categories",
//!   "TaxonomyPart": {
//!     "TermContentType": "Category",
//!     "Terms": [
//!       {
//!         "ContentItemId": "4x9travel",
//!         "ContentType": "Category",
//!         "DisplayText": "Travel",
//!         "Terms": []
//!       }
//!     ]
//!   }
//! }
//! ```
//!
//! A term's children live in its own `Terms` property. A missing or malformed
//! `Terms` property means the term has no children; it is never an error.
//! `Terms` arrays are read entry by entry, so one malformed term is skipped
//! without dropping its siblings. A `null` `DisplayText` reads as empty.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Property holding the taxonomy part on a taxonomy content item.
pub const TAXONOMY_PART: &str = "TaxonomyPart";

/// Property holding the child terms of a term content item.
pub const TERMS: &str = "Terms";

/// A content item as returned by the content store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContentItem {
    /// Stable identifier of the item
    pub content_item_id: String,
    /// Name of the content type, e.g. `Category`
    pub content_type: String,
    /// Human readable title, empty when the host stores none
    #[serde(default, deserialize_with = "null_as_empty")]
    pub display_text: String,
    /// All remaining properties of the document
    #[serde(flatten)]
    pub content: Map<String, Value>,
}

impl ContentItem {
    /// Create an item with no extra content.
    ///
    /// # Examples
    ///
    /// ```
    /// use taxonomy_shapes::content::ContentItem;
    ///
    /// let mut travel = ContentItem::new("travel", "Category", "Travel");
    /// travel.set_child_terms(vec![ContentItem::new("europe", "Category", "Europe")]);
    ///
    /// assert_eq!(travel.child_terms()[0].display_text, "Europe");
    /// ```
    pub fn new(
        content_item_id: impl Into<String>,
        content_type: impl Into<String>,
        display_text: impl Into<String>,
    ) -> Self {
        Self {
            content_item_id: content_item_id.into(),
            content_type: content_type.into(),
            display_text: display_text.into(),
            content: Map::new(),
        }
    }

    /// Read the taxonomy part of this item.
    ///
    /// Returns `None` when the item has no `TaxonomyPart` property or the
    /// property does not describe a taxonomy.
    #[must_use]
    pub fn taxonomy_part(&self) -> Option<TaxonomyPart> {
        let part = self.content.get(TAXONOMY_PART)?;
        if !part.is_object() {
            return None;
        }
        TaxonomyPart::deserialize(part).ok()
    }

    /// Parse the child terms stored under this item's `Terms` property.
    ///
    /// A missing or non-array property yields no children. Entries that are
    /// not content items are skipped.
    #[must_use]
    pub fn child_terms(&self) -> Vec<ContentItem> {
        match self.content.get(TERMS) {
            Some(Value::Array(terms)) => parse_terms(terms),
            _ => Vec::new(),
        }
    }

    /// Replace this item's child terms.
    pub fn set_child_terms(&mut self, terms: Vec<ContentItem>) {
        let terms = terms.into_iter().map(|term| term.into_value()).collect();
        self.content.insert(TERMS.to_string(), Value::Array(terms));
    }

    /// Attach a taxonomy part to this item, replacing any existing one.
    pub fn set_taxonomy_part(&mut self, part: &TaxonomyPart) {
        self.content.insert(TAXONOMY_PART.to_string(), part.to_value());
    }

    fn into_value(self) -> Value {
        let mut object = self.content;
        object.insert("ContentItemId".to_string(), Value::String(self.content_item_id));
        object.insert("ContentType".to_string(), Value::String(self.content_type));
        object.insert("DisplayText".to_string(), Value::String(self.display_text));
        Value::Object(object)
    }
}

/// The taxonomy part of a taxonomy content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaxonomyPart {
    /// Content type of the items stored as terms
    pub term_content_type: String,
    /// Top-level terms, in display order
    #[serde(default, deserialize_with = "lenient_terms")]
    pub terms: Vec<ContentItem>,
}

impl TaxonomyPart {
    /// Create a taxonomy part.
    ///
    /// # Arguments
    ///
    /// * `term_content_type` - content type every term is expected to have
    /// * `terms` - top-level terms; nested terms live in each term's `Terms`
    ///
    /// # Examples
    ///
    /// ```
    /// use taxonomy_shapes::content::{ContentItem, TaxonomyPart};
    ///
    /// let part = TaxonomyPart::new("Category", vec![ContentItem::new("travel", "Category", "Travel")]);
    /// assert!(part.find_term("travel").is_some());
    /// ```
    pub fn new(term_content_type: impl Into<String>, terms: Vec<ContentItem>) -> Self {
        Self {
            term_content_type: term_content_type.into(),
            terms,
        }
    }

    /// Find a term anywhere in the hierarchy.
    #[must_use]
    pub fn find_term(&self, term_content_item_id: &str) -> Option<ContentItem> {
        find_in(&self.terms, term_content_item_id)
    }

    /// The term followed by each of its ancestors, up to the top level.
    ///
    /// Returns `None` when the term is not part of this taxonomy.
    #[must_use]
    pub fn term_hierarchy(&self, term_content_item_id: &str) -> Option<Vec<ContentItem>> {
        let mut chain = Vec::new();
        hierarchy_in(&self.terms, term_content_item_id, &mut chain).then_some(chain)
    }

    fn to_value(&self) -> Value {
        let terms = self.terms.iter().cloned().map(ContentItem::into_value).collect();

        let mut object = Map::new();
        object.insert("TermContentType".to_string(), Value::String(self.term_content_type.clone()));
        object.insert(TERMS.to_string(), Value::Array(terms));
        Value::Object(object)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_terms<'de, D>(deserializer: D) -> Result<Vec<ContentItem>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(terms)) => Ok(parse_terms(&terms)),
        _ => Ok(Vec::new()),
    }
}

/// Parse each entry on its own, skipping entries that are not content items.
fn parse_terms(terms: &[Value]) -> Vec<ContentItem> {
    terms
        .iter()
        .filter_map(|term| match ContentItem::deserialize(term) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::trace!("Skipping malformed term: {}", e);
                None
            }
        })
        .collect()
}

fn find_in(terms: &[ContentItem], id: &str) -> Option<ContentItem> {
    terms.iter().find_map(|term| {
        if term.content_item_id == id {
            Some(term.clone())
        } else {
            find_in(&term.child_terms(), id)
        }
    })
}

fn hierarchy_in(terms: &[ContentItem], id: &str, chain: &mut Vec<ContentItem>) -> bool {
    for term in terms {
        if term.content_item_id == id || hierarchy_in(&term.child_terms(), id, chain) {
            chain.push(term.clone());
            return true;
        }
    }
    false
}
