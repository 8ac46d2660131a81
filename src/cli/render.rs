//! The `render` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use crate::config::{OutputFormat, ShapesConfig};
use crate::core::ShapeError;
use crate::display::{RenderOptions, ShapeTable, ShapeView};
use crate::host::MemoryContentStore;
use crate::shapes::{ShapeContext, TermReference, TermShape};

#[derive(Args)]
pub struct RenderCommand {
    /// JSON content fixture standing in for the content store
    fixture: PathBuf,

    /// Taxonomy content item id
    #[arg(long, conflicts_with = "alias")]
    taxonomy: Option<String>,

    /// Alias resolving to the taxonomy
    #[arg(long)]
    alias: Option<String>,

    /// Render only the inherited hierarchy of this term
    #[arg(long)]
    term: Option<String>,

    /// Deepest level to process
    #[arg(long)]
    depth: Option<usize>,

    /// Display type for term part alternates
    #[arg(long)]
    display_type: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

impl RenderCommand {
    fn reference(&self) -> Result<TermReference> {
        let reference = match (&self.taxonomy, &self.alias) {
            (Some(id), _) => TermReference::content_item_id(id),
            (None, Some(alias)) => TermReference::alias(alias),
            (None, None) => return Err(ShapeError::MissingReference.into()),
        };

        Ok(match &self.term {
            Some(term) => reference.with_term(term),
            None => reference,
        })
    }

    pub async fn execute(self, config: &ShapesConfig) -> Result<()> {
        let reference = self.reference()?;
        let store = MemoryContentStore::load(&self.fixture).await?;
        let context = ShapeContext::from_host(Arc::new(store));

        let options = RenderOptions {
            max_depth: self.depth.or(config.max_depth),
            display_type: Some(self.display_type.unwrap_or_else(|| config.display_type.clone())),
        };

        let mut term = TermShape::new(reference);
        ShapeTable::new().render_tree(&mut term, &context, &options).await;

        if term.taxonomy().is_none() {
            tracing::debug!("Nothing to render for {:?}", term.reference());
            return Ok(());
        }

        let view = ShapeView::of_term(&term);
        match self.format.unwrap_or(config.format) {
            OutputFormat::Text => print!("{}", view.to_text()),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&view)
                    .context("Failed to serialize rendered tree")?;
                println!("{json}");
            }
        }

        Ok(())
    }
}
