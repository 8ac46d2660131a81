//! The `alternates` command.

use anyhow::Result;
use clap::Args;

use crate::alternates::{
    AlternateNames, NodeKind, level_alternates, term_alternates, term_part_alternates,
};
use crate::config::ShapesConfig;
use crate::naming::to_pascal_identifier;

#[derive(Args)]
pub struct AlternatesCommand {
    /// Node kind: Term, TermItem, TermContentItem, or TermPart
    kind: String,

    /// Content type of the node (the taxonomy's term content type for TermItem)
    #[arg(long)]
    content_type: String,

    /// Tree level
    #[arg(long, default_value_t = 0)]
    level: usize,

    /// Display name the differentiator is derived from
    #[arg(long)]
    name: Option<String>,

    /// Display type, for TermPart
    #[arg(long)]
    display_type: Option<String>,
}

impl AlternatesCommand {
    fn names(&self, kind: NodeKind, default_display_type: &str) -> AlternateNames {
        let differentiator = self.name.as_deref().and_then(to_pascal_identifier);
        let differentiator = differentiator.as_deref();

        match kind {
            NodeKind::Term => term_alternates(&self.content_type, differentiator),
            NodeKind::TermItem | NodeKind::TermContentItem => {
                level_alternates(kind, &self.content_type, self.level, differentiator)
            }
            NodeKind::TermPart => term_part_alternates(
                &self.content_type,
                self.display_type.as_deref().unwrap_or(default_display_type),
            ),
        }
    }

    pub fn execute(self, config: &ShapesConfig) -> Result<()> {
        let kind: NodeKind = self.kind.parse()?;

        for name in &self.names(kind, &config.display_type) {
            println!("{name}");
        }

        Ok(())
    }
}
