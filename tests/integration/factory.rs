use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::FutureExt;
use futures::future::BoxFuture;
use taxonomy_shapes::display::{RenderOptions, ShapeTable};
use taxonomy_shapes::shapes::{
    Shape, ShapeContext, ShapeFactory, TermItemArgs, TermItemShape, TermReference, TermShape,
};
use taxonomy_shapes::test_utils::TaxonomyFixture;

/// Counts created shapes and marks each with a class.
#[derive(Default)]
struct CountingFactory {
    created: AtomicUsize,
}

impl ShapeFactory for CountingFactory {
    fn create_term_item(&self, args: TermItemArgs) -> BoxFuture<'_, TermItemShape> {
        async move {
            self.created.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;

            let mut shape = TermItemShape::new(args);
            shape.metadata_mut().classes.add("from-factory");
            shape
        }
        .boxed()
    }
}

#[tokio::test]
async fn test_custom_factory_builds_every_materialized_item() {
    let factory = Arc::new(CountingFactory::default());
    let context = ShapeContext::from_host(Arc::new(TaxonomyFixture::categories().store()))
        .with_factory(factory.clone());

    let mut term = TermShape::new(TermReference::alias("alias:categories"));
    term.populate(&context).await;
    assert_eq!(factory.created.load(Ordering::SeqCst), 3);

    ShapeTable::new().render_tree(&mut term, &context, &RenderOptions::default()).await;
    // Travel, Europe, Paris, Asia, Food, News
    assert_eq!(factory.created.load(Ordering::SeqCst), 6);

    let travel = &term.items()[0];
    assert_eq!(travel.metadata().classes.as_slice()[0], "from-factory");
    assert!(travel.metadata().classes.contains("term-item-category"));
}

#[tokio::test]
async fn test_factory_is_not_called_below_depth_limit() {
    let factory = Arc::new(CountingFactory::default());
    let context = ShapeContext::from_host(Arc::new(TaxonomyFixture::categories().store()))
        .with_factory(factory.clone());

    let options = RenderOptions {
        max_depth: Some(0),
        display_type: None,
    };
    let mut term = TermShape::new(TermReference::alias("alias:categories"));
    ShapeTable::new().render_tree(&mut term, &context, &options).await;

    // Three roots plus Travel's two children; Europe is never populated
    assert_eq!(factory.created.load(Ordering::SeqCst), 5);
}
