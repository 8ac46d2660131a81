use std::sync::Arc;

use taxonomy_shapes::alternates::NodeKind;
use taxonomy_shapes::display::{RenderOptions, ShapeTable, ShapeView};
use taxonomy_shapes::host::{ContentFixture, MemoryContentStore};
use taxonomy_shapes::shapes::{Shape, ShapeContext, TermReference, TermShape};
use taxonomy_shapes::test_utils::{TaxonomyFixture, TermFixture, init_test_logging};

fn three_roots() -> TaxonomyFixture {
    TaxonomyFixture::new("tax", "Blog Categories", "Category")
        .alias("alias:blog")
        .term(
            TermFixture::new("a", "A")
                .child(TermFixture::new("a1", "A1"))
                .child(TermFixture::new("a2", "A2")),
        )
        .term(TermFixture::new("b", "B"))
        .term(TermFixture::new("c", "C"))
}

fn context(fixture: &TaxonomyFixture) -> ShapeContext {
    ShapeContext::from_host(Arc::new(fixture.store()))
}

#[tokio::test]
async fn test_levels_are_materialized_on_demand() {
    init_test_logging(None);
    let context = context(&three_roots());
    let table = ShapeTable::new();

    let mut term = TermShape::new(TermReference::content_item_id("tax"));
    table.process(&mut term, &context).await;

    assert_eq!(term.items().len(), 3);
    assert!(term.items().iter().all(|item| item.items().is_empty()));
    assert!(term.items().iter().all(|item| !item.is_populated()));

    let first = &mut term.items_mut()[0];
    table.process(&mut *first, &context).await;

    let children: Vec<_> =
        first.items().iter().map(|item| item.term_content_item().content_item_id.as_str()).collect();
    assert_eq!(children, ["a1", "a2"]);

    for child in first.items_mut() {
        assert_eq!(child.level(), 1);
        assert!(child.metadata().alternates.is_empty());
        table.tag(&mut *child);
        assert!(child.metadata().alternates.contains("TermItem__level__1"));
    }
}

#[tokio::test]
async fn test_full_alternate_lists() {
    let context = context(&three_roots());
    let table = ShapeTable::new();

    let mut term = TermShape::new(TermReference::alias("alias:blog"));
    table.process(&mut term, &context).await;

    assert_eq!(term.metadata().alternates.as_slice(), ["Term__BlogCategories", "Term__Category"]);
    assert_eq!(
        term.metadata().classes.as_slice(),
        ["term", "term-blog-categories", "term-category"]
    );

    let item = &mut term.items_mut()[0];
    table.process(&mut *item, &context).await;
    table.process(&mut item.items_mut()[1], &context).await;

    let grandchild = &item.items()[1];
    assert_eq!(
        grandchild.metadata().alternates.as_slice(),
        [
            "TermItem__level__1",
            "TermItem__Category",
            "TermItem__Category__level__1",
            "TermItem__BlogCategories",
            "TermItem__BlogCategories__level__1",
            "TermItem__BlogCategories__Category",
            "TermItem__BlogCategories__Category__level__1",
        ]
    );
}

#[tokio::test]
async fn test_children_keep_taxonomy_order() {
    let fixture = TaxonomyFixture::new("tax", "Tags", "Tag")
        .term(TermFixture::new("z", "Zebra"))
        .term(TermFixture::new("a", "Apple"))
        .term(TermFixture::new("m", "Mango"));
    let context = context(&fixture);

    let mut term = TermShape::new(TermReference::content_item_id("tax"));
    term.populate(&context).await;

    let order: Vec<_> =
        term.items().iter().map(|item| item.term_content_item().display_text.as_str()).collect();
    assert_eq!(order, ["Zebra", "Apple", "Mango"]);
}

#[tokio::test]
async fn test_missing_data_renders_nothing() {
    let context = context(&three_roots());
    let table = ShapeTable::new();

    for reference in [
        TermReference::alias("alias:unknown"),
        TermReference::content_item_id("missing"),
        TermReference::content_item_id("tax").with_term("not-a-term"),
    ] {
        let mut term = TermShape::new(reference);
        table.render_tree(&mut term, &context, &RenderOptions::default()).await;

        assert!(term.items().is_empty());
        assert!(term.taxonomy().is_none());
        assert!(term.metadata().alternates.is_empty());
        assert_eq!(term.metadata().classes.as_slice(), ["term"]);
    }
}

#[tokio::test]
async fn test_targeted_term_renders_inherited_chain() {
    let context = context(&TaxonomyFixture::categories());
    let table = ShapeTable::new();

    let mut term =
        TermShape::new(TermReference::alias("alias:categories").with_term("paris"));
    table.render_tree(&mut term, &context, &RenderOptions::default()).await;

    let chain: Vec<_> =
        term.items().iter().map(|item| item.term_content_item().content_item_id.as_str()).collect();
    assert_eq!(chain, ["paris", "europe", "travel"]);
    assert!(term.items().iter().all(|item| item.level() == 0));
    assert_eq!(term.differentiator(), Some("Categories"));
}

#[tokio::test]
async fn test_render_tree_depth_limit_leaves_deeper_levels_unbuilt() {
    let context = context(&TaxonomyFixture::categories());
    let table = ShapeTable::new();
    let options = RenderOptions {
        max_depth: Some(0),
        display_type: None,
    };

    let mut term = TermShape::new(TermReference::alias("alias:categories"));
    table.render_tree(&mut term, &context, &options).await;

    let travel = &term.items()[0];
    assert_eq!(travel.items().len(), 2);
    assert!(travel.items().iter().all(|item| !item.is_populated()));
    assert!(travel.items()[0].items().is_empty());
}

#[tokio::test]
async fn test_hooks_and_term_parts_in_view() {
    let context = context(&TaxonomyFixture::categories());
    let mut table = ShapeTable::new();
    table.describe(NodeKind::TermItem, |metadata| metadata.classes.add("menu-item"));

    let options = RenderOptions {
        max_depth: None,
        display_type: Some("Summary".to_string()),
    };

    let mut term = TermShape::new(TermReference::alias("alias:categories"));
    table.render_tree(&mut term, &context, &options).await;

    let view = ShapeView::of_term(&term);
    let news = &view.children[2];
    assert_eq!(news.kind, NodeKind::TermItem);
    assert_eq!(news.classes.as_slice(), ["term-item-categories", "term-item-category", "menu-item"]);

    let kinds: Vec<_> = news.children.iter().map(|child| child.kind).collect();
    assert_eq!(kinds, [NodeKind::TermContentItem, NodeKind::TermPart]);
    assert_eq!(
        news.children[1].alternates.as_slice(),
        ["TermPart_Summary", "Category__TermPart", "Category_Summary__TermPart"]
    );
}

#[tokio::test]
async fn test_second_render_pass_adds_no_duplicates() {
    let context = context(&TaxonomyFixture::categories());
    let table = ShapeTable::new();
    let options = RenderOptions::default();

    let mut term = TermShape::new(TermReference::alias("alias:categories"));
    table.render_tree(&mut term, &context, &options).await;
    let first = ShapeView::of_term(&term);

    table.render_tree(&mut term, &context, &options).await;
    assert_eq!(ShapeView::of_term(&term), first);
}

#[tokio::test]
async fn test_blank_taxonomy_name_means_no_differentiator() {
    let fixture = TaxonomyFixture::new("tax", "   ", "Category")
        .term(TermFixture::new("a", "A").child(TermFixture::new("a1", "A1")));
    let context = context(&fixture);
    let table = ShapeTable::new();

    let mut term = TermShape::new(TermReference::content_item_id("tax"));
    table.render_tree(&mut term, &context, &RenderOptions::default()).await;

    assert_eq!(term.differentiator(), None);
    assert_eq!(term.metadata().alternates.as_slice(), ["Term__Category"]);
    assert_eq!(term.metadata().classes.as_slice(), ["term", "term-category"]);

    let item = &term.items()[0];
    assert_eq!(item.metadata().classes.as_slice(), ["term-item-category"]);
    assert_eq!(
        item.metadata().alternates.as_slice(),
        ["TermItem__level__0", "TermItem__Category", "TermItem__Category__level__0"]
    );
    assert_eq!(item.items()[0].metadata().alternates.len(), 3);
}

#[tokio::test]
async fn test_untitled_terms_still_render() {
    let fixture: ContentFixture = serde_json::from_value(serde_json::json!({
        "aliases": { "alias:tags": "tags" },
        "items": [{
            "ContentItemId": "tags",
            "ContentType": "Taxonomy",
            "DisplayText": "Tags",
            "TaxonomyPart": {
                "TermContentType": "Tag",
                "Terms": [
                    {
                        "ContentItemId": "rust",
                        "ContentType": "Tag",
                        "DisplayText": "Rust",
                        "Terms": [
                            { "ContentItemId": "async", "ContentType": "Tag", "DisplayText": "Async" },
                            { "ContentItemId": "untitled-child", "ContentType": "Tag", "DisplayText": null }
                        ]
                    },
                    { "ContentItemId": "untitled", "ContentType": "Tag", "DisplayText": null }
                ]
            }
        }]
    }))
    .unwrap();
    let context = ShapeContext::from_host(Arc::new(MemoryContentStore::from_fixture(fixture)));

    let mut term = TermShape::new(TermReference::alias("alias:tags"));
    ShapeTable::new().render_tree(&mut term, &context, &RenderOptions::default()).await;

    let roots: Vec<_> =
        term.items().iter().map(|item| item.term_content_item().content_item_id.as_str()).collect();
    assert_eq!(roots, ["rust", "untitled"]);
    assert!(term.items()[1].metadata().alternates.contains("TermItem__Tags__Tag__level__0"));

    let children: Vec<_> = term.items()[0]
        .items()
        .iter()
        .map(|item| item.term_content_item().content_item_id.as_str())
        .collect();
    assert_eq!(children, ["async", "untitled-child"]);
}
