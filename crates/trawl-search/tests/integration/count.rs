//! Count requests.

use serde_json::json;
use trawl_core::Error;
use trawl_search::{CallOptions, OptionMap, OptionValue, SearchOption, SearchType};

use crate::common::TestHarness;

#[tokio::test]
async fn test_count_returns_total_hits() {
    let mut harness = TestHarness::with_indices(&["test"]);
    harness.respond_with_total(42);

    let count = harness.search.count("hans").await.unwrap();
    assert_eq!(count, 42);

    let sent = harness.last_request();
    assert_eq!(sent.path, "test/_search");
    assert_eq!(sent.body, json!({"query": {"query_string": {"query": "hans"}}}));
}

#[tokio::test]
async fn test_count_forces_search_type_without_persisting() {
    let mut harness = TestHarness::new();
    harness.search.set_option("search_type", "query_then_fetch").unwrap();
    harness.search.set_option("routing", "r1").unwrap();

    harness.search.count("").await.unwrap();
    assert_eq!(
        harness.last_request().params,
        OptionMap::single(SearchOption::SearchType, SearchType::Count)
    );

    harness.search.search("", CallOptions::None).await.unwrap();
    let sent = harness.last_request();
    assert_eq!(
        sent.params.get(SearchOption::SearchType),
        Some(&OptionValue::Single(json!("query_then_fetch")))
    );
    assert!(sent.params.contains(SearchOption::Routing));
}

#[tokio::test]
async fn test_count_on_unscoped_search() {
    let mut harness = TestHarness::new();
    harness.respond_with_total(0);

    assert_eq!(harness.search.count("").await.unwrap(), 0);
    assert_eq!(harness.last_request().path, "/_search");
}

#[tokio::test]
async fn test_count_propagates_transport_error() {
    let mut harness = TestHarness::new();
    harness
        .transport
        .push_error(Error::transport_status(404, "index missing"));

    let err = harness.search.count("").await.unwrap_err();
    assert!(err.is_client_error());
}
