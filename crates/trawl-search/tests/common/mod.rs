//! Common test utilities for trawl-search integration tests.

use std::sync::Arc;

use serde_json::{Map, Value, json};
use trawl_search::{MockTransport, RecordedRequest, Search};

/// A search wired to a mock transport the test can inspect.
pub struct TestHarness {
    /// Transport shared with `search`.
    pub transport: Arc<MockTransport>,
    /// Builder under test.
    pub search: Search,
}

impl TestHarness {
    /// Creates a harness with an empty scope.
    pub fn new() -> Self {
        let transport = Arc::new(MockTransport::new());
        let search = Search::new(transport.clone());
        Self { transport, search }
    }

    /// Creates a harness whose search targets the given indices.
    pub fn with_indices(indices: &[&str]) -> Self {
        let mut harness = Self::new();
        harness
            .search
            .add_indices(indices.iter().copied())
            .expect("index names are valid");
        harness
    }

    /// Queues a response reporting `total` matches.
    pub fn respond_with_total(&self, total: u64) {
        self.transport.push_body(hits_envelope(total, &[]));
    }

    /// The request most recently sent.
    pub fn last_request(&self) -> RecordedRequest {
        self.transport
            .last_request()
            .expect("at least one request was sent")
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// A search response with the given total and hit ids.
pub fn hits_envelope(total: u64, ids: &[&str]) -> Value {
    let hits: Vec<Value> = ids
        .iter()
        .map(|id| json!({"_index": "test", "_type": "doc", "_id": id, "_score": 1.0}))
        .collect();
    json!({
        "took": 3,
        "timed_out": false,
        "hits": {"total": total, "max_score": 1.0, "hits": hits}
    })
}

/// Unwraps a JSON object literal into a map.
pub fn object(value: Value) -> Map<String, Value> {
    value
        .as_object()
        .cloned()
        .expect("literal is a JSON object")
}
