//! The term part of a term content item.

use super::{Shape, ShapeMetadata};
use crate::alternates::{NodeKind, term_part_alternates};

/// A term content item's term part, rendered for one display type.
#[derive(Debug, Clone)]
pub struct TermPartShape {
    metadata: ShapeMetadata,
    content_type: String,
    display_type: String,
}

impl TermPartShape {
    #[must_use]
    pub fn new(content_type: &str, display_type: &str) -> Self {
        Self {
            metadata: ShapeMetadata::new(NodeKind::TermPart),
            content_type: content_type.to_string(),
            display_type: display_type.to_string(),
        }
    }

    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    #[must_use]
    pub fn display_type(&self) -> &str {
        &self.display_type
    }
}

impl Shape for TermPartShape {
    fn metadata(&self) -> &ShapeMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut ShapeMetadata {
        &mut self.metadata
    }

    fn tag_alternates(&mut self) {
        self.metadata
            .alternates
            .extend(term_part_alternates(&self.content_type, &self.display_type));
    }
}
