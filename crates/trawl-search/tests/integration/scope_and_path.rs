//! Scope accumulation and the paths it produces.

use serde_json::json;
use trawl_core::{Error, Index};
use trawl_search::CallOptions;

use crate::common::TestHarness;

#[tokio::test]
async fn test_path_truth_table() {
    let cases: &[(&[&str], &[&str], &str)] = &[
        (&[], &[], "/_search"),
        (&[], &["t1", "t2"], "_all/t1,t2/_search"),
        (&["a", "b"], &[], "a,b/_search"),
        (&["a"], &["t1", "t2"], "a/t1,t2/_search"),
    ];

    for (indices, types, expected) in cases {
        let mut harness = TestHarness::with_indices(indices);
        harness.search.add_types(types.iter().copied()).unwrap();
        harness.search.search("", CallOptions::None).await.unwrap();
        assert_eq!(harness.last_request().path, *expected);
    }
}

#[tokio::test]
async fn test_scope_accumulates_across_searches() {
    let mut harness = TestHarness::with_indices(&["a"]);
    harness.search.search("", CallOptions::None).await.unwrap();
    assert_eq!(harness.last_request().path, "a/_search");

    harness.search.add_index("b").unwrap();
    harness.search.search("", CallOptions::None).await.unwrap();
    assert_eq!(harness.last_request().path, "a,b/_search");
}

#[test]
fn test_index_handles_and_strings_mix() {
    let mut harness = TestHarness::new();
    let index = Index::new("test1");
    harness
        .search
        .add_index(&index)
        .unwrap()
        .add_index("test2")
        .unwrap()
        .add_type(&index.doc_type("helloworld"))
        .unwrap();
    assert_eq!(harness.search.indices(), ["test1", "test2"]);
    assert_eq!(harness.search.path(), "test1,test2/helloworld/_search");
}

#[test]
fn test_invalid_scope_input_leaves_scope_unchanged() {
    let mut harness = TestHarness::with_indices(&["kept"]);
    let err = harness.search.add_index(&json!({"index": "x"})).unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));
    assert_eq!(harness.search.indices(), ["kept"]);
}
