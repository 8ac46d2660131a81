use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use anyhow::{Result, anyhow};
use futures::FutureExt;
use futures::future::BoxFuture;
use taxonomy_shapes::content::ContentItem;
use taxonomy_shapes::display::{RenderOptions, ShapeTable, ShapeView};
use taxonomy_shapes::host::{AliasResolver, ContentStore, MemoryContentStore, TermLookup};
use taxonomy_shapes::shapes::{Shape, ShapeContext, TermReference, TermShape};
use taxonomy_shapes::test_utils::TaxonomyFixture;

/// Delays every fetch so passes interleave at each suspension point.
struct SlowHost {
    inner: MemoryContentStore,
    delay: Duration,
    fetches: AtomicUsize,
}

impl SlowHost {
    fn new(inner: MemoryContentStore) -> Self {
        Self {
            inner,
            delay: Duration::from_millis(5),
            fetches: AtomicUsize::new(0),
        }
    }

    async fn pause(&self) {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
    }
}

impl AliasResolver for SlowHost {
    fn resolve_alias<'a>(&'a self, alias: &'a str) -> BoxFuture<'a, Result<Option<String>>> {
        async move {
            self.pause().await;
            self.inner.resolve_alias(alias).await
        }
        .boxed()
    }
}

impl ContentStore for SlowHost {
    fn get<'a>(&'a self, content_item_id: &'a str) -> BoxFuture<'a, Result<Option<ContentItem>>> {
        async move {
            self.pause().await;
            self.inner.get(content_item_id).await
        }
        .boxed()
    }
}

impl TermLookup for SlowHost {
    fn get_taxonomy_term<'a>(
        &'a self,
        taxonomy_content_item_id: &'a str,
        term_content_item_id: &'a str,
    ) -> BoxFuture<'a, Result<Option<ContentItem>>> {
        async move {
            self.pause().await;
            self.inner.get_taxonomy_term(taxonomy_content_item_id, term_content_item_id).await
        }
        .boxed()
    }

    fn get_inherited_terms<'a>(
        &'a self,
        taxonomy_content_item_id: &'a str,
        term_content_item_id: &'a str,
    ) -> BoxFuture<'a, Result<Option<Vec<ContentItem>>>> {
        async move {
            self.pause().await;
            self.inner.get_inherited_terms(taxonomy_content_item_id, term_content_item_id).await
        }
        .boxed()
    }
}

/// Fails every fetch.
struct BrokenHost;

impl AliasResolver for BrokenHost {
    fn resolve_alias<'a>(&'a self, _alias: &'a str) -> BoxFuture<'a, Result<Option<String>>> {
        futures::future::ready(Err(anyhow!("alias index offline"))).boxed()
    }
}

impl ContentStore for BrokenHost {
    fn get<'a>(&'a self, _id: &'a str) -> BoxFuture<'a, Result<Option<ContentItem>>> {
        futures::future::ready(Err(anyhow!("store offline"))).boxed()
    }
}

impl TermLookup for BrokenHost {
    fn get_taxonomy_term<'a>(
        &'a self,
        _taxonomy: &'a str,
        _term: &'a str,
    ) -> BoxFuture<'a, Result<Option<ContentItem>>> {
        futures::future::ready(Err(anyhow!("lookup offline"))).boxed()
    }

    fn get_inherited_terms<'a>(
        &'a self,
        _taxonomy: &'a str,
        _term: &'a str,
    ) -> BoxFuture<'a, Result<Option<Vec<ContentItem>>>> {
        futures::future::ready(Err(anyhow!("lookup offline"))).boxed()
    }
}

async fn render(reference: TermReference, context: &ShapeContext) -> ShapeView {
    let mut term = TermShape::new(reference);
    ShapeTable::new().render_tree(&mut term, context, &RenderOptions::default()).await;
    ShapeView::of_term(&term)
}

#[tokio::test]
async fn test_concurrent_passes_are_independent() {
    let host = Arc::new(SlowHost::new(TaxonomyFixture::categories().store()));
    let context = ShapeContext::from_host(host.clone());

    let whole = TermReference::alias("alias:categories");
    let branch = TermReference::content_item_id("4x9taxonomy").with_term("asia");

    let (whole_view, branch_view) =
        tokio::join!(render(whole.clone(), &context), render(branch.clone(), &context));

    assert!(host.fetches.load(Ordering::SeqCst) >= 4);

    let sequential = ShapeContext::from_host(Arc::new(TaxonomyFixture::categories().store()));
    assert_eq!(whole_view, render(whole, &sequential).await);
    assert_eq!(branch_view, render(branch, &sequential).await);

    assert_eq!(whole_view.children.len(), 3);
    let branch_ids: Vec<_> =
        branch_view.children.iter().filter_map(|child| child.content_item_id.as_deref()).collect();
    assert_eq!(branch_ids, ["asia", "travel"]);
}

#[tokio::test]
async fn test_many_passes_on_spawned_tasks() {
    let context = ShapeContext::from_host(Arc::new(SlowHost::new(
        TaxonomyFixture::categories().store(),
    )));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let context = context.clone();
            tokio::spawn(async move {
                render(TermReference::alias("alias:categories"), &context).await
            })
        })
        .collect();

    let mut views = Vec::new();
    for handle in handles {
        views.push(handle.await.unwrap());
    }
    assert!(views.windows(2).all(|pair| pair[0] == pair[1]));
}

#[tokio::test]
async fn test_host_failures_are_treated_as_absent() {
    let context = ShapeContext::from_host(Arc::new(BrokenHost));

    for reference in [
        TermReference::alias("alias:categories"),
        TermReference::content_item_id("4x9taxonomy").with_term("asia"),
    ] {
        let mut term = TermShape::new(reference);
        term.populate(&context).await;
        term.tag_alternates();

        assert!(term.is_populated());
        assert!(term.items().is_empty());
        assert!(term.metadata().alternates.is_empty());
    }
}
