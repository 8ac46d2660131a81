//! Alternate name derivation for taxonomy shapes.
//!
//! An alternate name is a convention-based string a template lookup uses to
//! pick increasingly specific templates for a node. Names are composed from
//! segments joined by `__`, with depth encoded as the literal segment
//! `level__<N>`:
//!
//! | Node kind         | Example                                   |
//! |-------------------|-------------------------------------------|
//! | `Term`            | `Term__Categories`, `Term__Category`      |
//! | `TermItem`        | `TermItem__Category__level__2`            |
//! | `TermContentItem` | `TermContentItem__Travel__level__1`       |
//! | `TermPart`        | `TermPart_Summary`, `Category__TermPart`  |
//!
//! The builders here are pure. They return fresh [`AlternateNames`] which
//! callers merge into a shape's metadata with [`AlternateNames::extend`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::ShapeError;
use crate::naming::encode_fragment;

/// Segment separator used between the parts of an alternate name.
pub const SEPARATOR: &str = "__";

/// The kinds of shapes the taxonomy module renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    /// Root container for a whole taxonomy (or a targeted sub-branch).
    Term,
    /// One term within the rendered tree.
    TermItem,
    /// The content item carried by a term item.
    TermContentItem,
    /// The term part of a term content item displayed on its own.
    TermPart,
}

impl NodeKind {
    /// All node kinds, in rendering order.
    pub const ALL: [Self; 4] = [Self::Term, Self::TermItem, Self::TermContentItem, Self::TermPart];

    /// The shape type name, used as the first alternate segment.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Term => "Term",
            Self::TermItem => "TermItem",
            Self::TermContentItem => "TermContentItem",
            Self::TermPart => "TermPart",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ShapeError::UnknownNodeKind {
                name: s.to_string(),
            })
    }
}

/// An insertion-ordered collection of names with duplicates ignored.
///
/// Used for both alternate names and CSS classes. Adding never removes or
/// reorders existing entries, and adding a name that is already present is a
/// no-op, so repeated identical input leaves the collection unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AlternateNames {
    names: Vec<String>,
}

/// CSS classes attached to a shape. Same ordering rules as alternates.
pub type Classes = AlternateNames;

impl AlternateNames {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name` unless it is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use taxonomy_shapes::alternates::AlternateNames;
    ///
    /// let mut names = AlternateNames::new();
    /// names.add("TermItem__level__0");
    /// names.add("TermItem__Category");
    /// names.add("TermItem__level__0");
    ///
    /// assert_eq!(names.as_slice(), ["TermItem__level__0", "TermItem__Category"]);
    /// ```
    pub fn add(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.contains(&name) {
            self.names.push(name);
        }
    }

    /// Append every name from `other`, in order.
    pub fn extend<I, S>(&mut self, other: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in other {
            self.add(name);
        }
    }

    /// Whether `name` is already in the collection.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    /// Number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True before anything has been tagged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in insertion order, least specific first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// The names as a slice, for comparisons and indexing.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }
}

impl IntoIterator for AlternateNames {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}

impl<'a> IntoIterator for &'a AlternateNames {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for AlternateNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut names = Self::new();
        names.extend(iter);
        names
    }
}

fn join(segments: &[&str]) -> String {
    segments.join(SEPARATOR)
}

fn level_segment(level: usize) -> String {
    format!("level{SEPARATOR}{level}")
}

fn non_empty(differentiator: Option<&str>) -> Option<&str> {
    differentiator.filter(|d| !d.is_empty())
}

/// Alternates for the taxonomy root container.
///
/// Emits `Term__<differentiator>` when a differentiator is present, then
/// `Term__<encoded content type>`.
#[must_use]
pub fn term_alternates(content_type: &str, differentiator: Option<&str>) -> AlternateNames {
    let kind = NodeKind::Term.as_str();
    let mut names = AlternateNames::new();

    // Term__[TermName] e.g. Term__Categories
    if let Some(differentiator) = non_empty(differentiator) {
        names.add(join(&[kind, differentiator]));
    }

    // Term__[TermContentType] e.g. Term__Category
    names.add(join(&[kind, &encode_fragment(content_type)]));
    names
}

/// Alternates for a node that sits at a level of the tree.
///
/// Applies to [`NodeKind::TermItem`] and [`NodeKind::TermContentItem`]. The
/// order is fixed: level only, content type, content type with level, then
/// (with a differentiator) differentiator, differentiator with level,
/// differentiator with content type, and differentiator with content type and
/// level.
#[must_use]
pub fn level_alternates(
    kind: NodeKind,
    content_type: &str,
    level: usize,
    differentiator: Option<&str>,
) -> AlternateNames {
    let kind = kind.as_str();
    let encoded = encode_fragment(content_type);
    let level = level_segment(level);
    let mut names = AlternateNames::new();

    names.add(join(&[kind, &level]));
    names.add(join(&[kind, &encoded]));
    names.add(join(&[kind, &encoded, &level]));

    if let Some(differentiator) = non_empty(differentiator) {
        names.add(join(&[kind, differentiator]));
        names.add(join(&[kind, differentiator, &level]));
        names.add(join(&[kind, differentiator, &encoded]));
        names.add(join(&[kind, differentiator, &encoded, &level]));
    }

    names
}

/// Alternates for a term part displayed with a given display type.
///
/// `TermPart_<DisplayType>`, then `<ContentType>__TermPart` and
/// `<ContentType>_<DisplayType>__TermPart`. The content type is used as is.
#[must_use]
pub fn term_part_alternates(content_type: &str, display_type: &str) -> AlternateNames {
    let kind = NodeKind::TermPart.as_str();
    let mut names = AlternateNames::new();

    // TermPart_[DisplayType] e.g. TermPart_Summary
    names.add(format!("{kind}_{display_type}"));

    // [ContentType]__TermPart, [ContentType]_[DisplayType]__TermPart
    names.add(format!("{content_type}{SEPARATOR}{kind}"));
    names.add(format!("{content_type}_{display_type}{SEPARATOR}{kind}"));

    names
}
