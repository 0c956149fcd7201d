//! How the two arguments of `search` shape the emitted request.

use serde_json::json;
use trawl_core::Error;
use trawl_search::{CallOptions, OptionValue, Query, QueryInput, SearchOption};

use crate::common::{TestHarness, hits_envelope, object};

#[tokio::test]
async fn test_option_map_splits_body_controls_from_options() {
    let mut harness = TestHarness::with_indices(&["test"]);
    harness.transport.push_body(hits_envelope(2, &["1", "2"]));

    let options = CallOptions::from(object(json!({"limit": 5, "routing": "r1,r2"})));
    let results = harness.search.search("test", options).await.unwrap();
    assert_eq!(results.count(), 2);

    let sent = harness.last_request();
    assert_eq!(sent.body["size"], 5);
    assert_eq!(sent.params.len(), 1);
    assert_eq!(
        sent.params.get(SearchOption::Routing),
        Some(&OptionValue::Single(json!("r1,r2")))
    );
    assert!(!harness.search.has_option("limit"));
}

#[tokio::test]
async fn test_limit_shorthand_leaves_options_alone() {
    let mut harness = TestHarness::with_indices(&["test"]);
    harness.search.set_option("preference", "_local").unwrap();

    harness.search.search("test", 3u64).await.unwrap();

    let sent = harness.last_request();
    assert_eq!(sent.body["size"], 3);
    assert_eq!(
        sent.params.get(SearchOption::Preference),
        Some(&OptionValue::Single(json!("_local")))
    );
}

#[tokio::test]
async fn test_explain_goes_to_body() {
    let mut harness = TestHarness::new();
    let options = CallOptions::from(object(json!({"explain": true})));

    harness.search.search("", options).await.unwrap();

    let sent = harness.last_request();
    assert_eq!(sent.body["explain"], true);
    assert!(sent.params.is_empty());
}

#[tokio::test]
async fn test_option_map_replaces_stored_options() {
    let mut harness = TestHarness::new();
    harness.search.set_option("routing", "old").unwrap();
    harness.search.set_option("version", true).unwrap();

    let options = CallOptions::from(object(json!({"timeout": "5s"})));
    harness.search.search("", options).await.unwrap();

    let sent = harness.last_request();
    assert_eq!(sent.params.len(), 1);
    assert!(sent.params.contains(SearchOption::Timeout));
    assert!(!harness.search.has_option("routing"));
}

#[tokio::test]
async fn test_unknown_option_fails_before_sending() {
    let mut harness = TestHarness::new();
    let options = CallOptions::from(object(json!({"colour": "blue"})));

    let err = harness.search.search("", options).await.unwrap_err();
    assert!(matches!(err, Error::InvalidOption { .. }));
    assert_eq!(harness.transport.request_count(), 0);
}

#[tokio::test]
async fn test_bad_limit_value_rejected() {
    let mut harness = TestHarness::new();
    let options = CallOptions::from(object(json!({"limit": "ten"})));

    let err = harness.search.search("", options).await.unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));
    assert_eq!(harness.transport.request_count(), 0);
}

#[tokio::test]
async fn test_query_shapes() {
    let mut harness = TestHarness::new();

    harness.search.search(QueryInput::Empty, CallOptions::None).await.unwrap();
    assert_eq!(harness.last_request().body, json!({"query": {"match_all": {}}}));

    harness.search.search("farrelley", CallOptions::None).await.unwrap();
    assert_eq!(
        harness.last_request().body,
        json!({"query": {"query_string": {"query": "farrelley"}}})
    );

    let raw = object(json!({"query": {"term": {"user": "kimchy"}}}));
    harness.search.search(raw, CallOptions::None).await.unwrap();
    assert_eq!(
        harness.last_request().body,
        json!({"query": {"term": {"user": "kimchy"}}})
    );

    let mut built = Query::match_all();
    built.set_from(20);
    harness.search.search(built.clone(), CallOptions::None).await.unwrap();
    assert_eq!(harness.last_request().body, built.to_value());
}

#[tokio::test]
async fn test_empty_query_reuses_current() {
    let mut harness = TestHarness::new();
    harness.search.search("first", CallOptions::None).await.unwrap();
    harness.search.search("", 2u64).await.unwrap();

    assert_eq!(
        harness.last_request().body,
        json!({"query": {"query_string": {"query": "first"}}, "size": 2})
    );
}

#[tokio::test]
async fn test_multi_valued_option_transmitted() {
    let mut harness = TestHarness::new();
    harness.search.add_option("routing", "r1").unwrap();
    harness.search.add_option("routing", "r2").unwrap();

    harness.search.search("", CallOptions::None).await.unwrap();

    let sent = harness.last_request();
    assert_eq!(
        sent.params.to_query_pairs(),
        vec![("routing".to_string(), "r1,r2".to_string())]
    );
}

#[tokio::test]
async fn test_null_option_is_not_transmitted() {
    let mut harness = TestHarness::with_indices(&["test"]);
    harness.search.set_option("routing", "old").unwrap();

    let options = CallOptions::from_value(json!({"limit": 2, "routing": null})).unwrap();
    harness.search.search("test", options).await.unwrap();

    let sent = harness.last_request();
    assert_eq!(sent.body["size"], 2);
    assert!(sent.params.is_empty());
    assert!(sent.params.to_query_pairs().is_empty());
    assert!(!harness.search.has_option("routing"));
}
