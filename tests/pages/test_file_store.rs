//! Tests for the directory-backed page store.

use super::support::{sample_products, sample_seo};
use pages_ms::{FetchContext, FileStore, PageAggregator, PageError, PageStore, StoreFetcher};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn store_with(
    seos: Option<serde_json::Value>,
    products: Option<serde_json::Value>,
) -> (TempDir, FileStore) {
    let dir = tempfile::tempdir().unwrap();
    if let Some(seos) = seos {
        fs::write(dir.path().join("seos.json"), seos.to_string()).unwrap();
    }
    if let Some(products) = products {
        fs::write(dir.path().join("products.json"), products.to_string()).unwrap();
    }
    let store = FileStore::open(dir.path()).unwrap();
    (dir, store)
}

#[test]
fn test_reads_documents_from_collection_files() {
    let (_dir, store) = store_with(
        Some(serde_json::to_value(vec![sample_seo()]).unwrap()),
        Some(serde_json::to_value(sample_products()).unwrap()),
    );
    let ctx = FetchContext::new();

    assert_eq!(store.find_seo(&ctx, 0).unwrap(), Some(sample_seo()));
    assert_eq!(store.find_products(&ctx, 0).unwrap(), Some(sample_products()));
    assert_eq!(store.find_seo(&ctx, 42).unwrap(), None);
    assert_eq!(store.find_products(&ctx, 42).unwrap(), Some(Vec::new()));
}

#[test]
fn test_missing_collection_files() {
    let (_dir, store) = store_with(None, None);
    let ctx = FetchContext::new();

    assert_eq!(store.find_seo(&ctx, 0).unwrap(), None);
    assert_eq!(store.find_products(&ctx, 0).unwrap(), None);
}

#[test]
fn test_uses_snake_case_document_fields() {
    let (_dir, store) = store_with(
        Some(json!([{
            "page_id": 3,
            "title": "Title",
            "description": "Description",
            "robots": "index,follow"
        }])),
        None,
    );

    let seo = store.find_seo(&FetchContext::new(), 3).unwrap().unwrap();
    assert_eq!(seo.robots, "index,follow");
}

#[test]
fn test_malformed_collection_is_decode_error() {
    let (_dir, store) = store_with(Some(json!({"not": "an array"})), None);

    let err = store.find_seo(&FetchContext::new(), 0).unwrap_err();
    assert!(matches!(err, PageError::Decode(_)));
}

#[test]
fn test_cancelled_context_skips_read() {
    let (_dir, store) = store_with(Some(json!([])), Some(json!([])));
    let ctx = FetchContext::new();
    ctx.cancel();

    assert!(matches!(store.find_seo(&ctx, 0), Err(PageError::Cancelled)));
    assert!(matches!(store.find_products(&ctx, 0), Err(PageError::Cancelled)));
}

#[test]
fn test_open_requires_directory() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");

    let store = FileStore::open(dir.path()).unwrap();
    assert_eq!(store.dir(), dir.path());

    assert!(matches!(
        FileStore::open(missing),
        Err(PageError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn test_assembles_page_from_files() {
    let (_dir, store) = store_with(
        Some(serde_json::to_value(vec![sample_seo()]).unwrap()),
        Some(serde_json::to_value(sample_products()).unwrap()),
    );
    let aggregator = PageAggregator::new(StoreFetcher::new(store));

    let page = aggregator.get_page(0).await.unwrap().expect("page exists");

    assert_eq!(page.seo, sample_seo());
    assert_eq!(page.products, sample_products());
}

#[tokio::test]
async fn test_picks_up_collection_changes_between_requests() {
    let (dir, store) = store_with(Some(json!([])), None);
    let aggregator = PageAggregator::new(StoreFetcher::new(store));

    assert_eq!(aggregator.get_page(0).await.unwrap(), None);

    fs::write(
        dir.path().join("seos.json"),
        serde_json::to_string(&vec![sample_seo()]).unwrap(),
    )
    .unwrap();

    let page = aggregator.get_page(0).await.unwrap().expect("page exists");
    assert!(page.products.is_empty());
}
