//! Typed view over a search response.

use serde_json::{Map, Value};
use trawl_query::Query;

use crate::transport::RawResponse;

/// One matching document.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    hit: Map<String, Value>,
}

impl Hit {
    /// Wraps a raw hit object.
    pub fn new(hit: Map<String, Value>) -> Self {
        Self { hit }
    }

    /// Document id (`_id`).
    pub fn id(&self) -> Option<&str> {
        self.str_param("_id")
    }

    /// Index the document lives in (`_index`).
    pub fn index(&self) -> Option<&str> {
        self.str_param("_index")
    }

    /// Document type (`_type`).
    pub fn doc_type(&self) -> Option<&str> {
        self.str_param("_type")
    }

    /// Relevance score (`_score`); `None` when the service did not score.
    pub fn score(&self) -> Option<f64> {
        self.param("_score").and_then(Value::as_f64)
    }

    /// Document version (`_version`), present when requested.
    pub fn version(&self) -> Option<u64> {
        self.param("_version").and_then(Value::as_u64)
    }

    /// Stored source document (`_source`).
    pub fn source(&self) -> Option<&Map<String, Value>> {
        self.param("_source").and_then(Value::as_object)
    }

    /// Requested stored fields (`fields`).
    pub fn fields(&self) -> Option<&Map<String, Value>> {
        self.param("fields").and_then(Value::as_object)
    }

    /// Any entry of the raw hit object.
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.hit.get(name)
    }

    /// The raw hit object.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.hit
    }

    fn str_param(&self, name: &str) -> Option<&str> {
        self.param(name).and_then(Value::as_str)
    }
}

/// Hits of one search, together with the response and query that produced
/// them.
///
/// Sections missing from the response read as zero or empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    response: RawResponse,
    query: Query,
    hits: Vec<Hit>,
    total_hits: u64,
    max_score: Option<f64>,
    took: u64,
    timed_out: bool,
}

impl ResultSet {
    /// Parses `response` for the given `query`.
    pub fn new(response: RawResponse, query: Query) -> Self {
        let body = &response.body;
        let hits_section = body.get("hits");

        let hits = hits_section
            .and_then(|h| h.get("hits"))
            .and_then(Value::as_array)
            .map(|hits| {
                hits.iter()
                    .filter_map(Value::as_object)
                    .cloned()
                    .map(Hit::new)
                    .collect()
            })
            .unwrap_or_default();

        // Older services send a bare number, newer ones `{"value": n}`.
        let total_hits = hits_section
            .and_then(|h| h.get("total"))
            .and_then(|total| total.as_u64().or_else(|| total.get("value")?.as_u64()))
            .unwrap_or(0);

        let max_score = hits_section
            .and_then(|h| h.get("max_score"))
            .and_then(Value::as_f64);
        let took = body.get("took").and_then(Value::as_u64).unwrap_or(0);
        let timed_out = body
            .get("timed_out")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        Self {
            response,
            query,
            hits,
            total_hits,
            max_score,
            took,
            timed_out,
        }
    }

    /// Hits on this page.
    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    /// Number of hits on this page.
    pub fn count(&self) -> usize {
        self.hits.len()
    }

    /// Same as [`count`](Self::count).
    pub fn len(&self) -> usize {
        self.count()
    }

    /// Returns `true` if this page holds no hits.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Total matches across all pages.
    pub fn total_hits(&self) -> u64 {
        self.total_hits
    }

    /// Best score, if any hit was scored.
    pub fn max_score(&self) -> Option<f64> {
        self.max_score
    }

    /// Service-side execution time in milliseconds.
    pub fn total_time(&self) -> u64 {
        self.took
    }

    /// Returns `true` if the service hit its time budget.
    pub fn has_timed_out(&self) -> bool {
        self.timed_out
    }

    /// The underlying response.
    pub fn response(&self) -> &RawResponse {
        &self.response
    }

    /// The query that was sent.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Iterates hits in response order.
    pub fn iter(&self) -> std::slice::Iter<'_, Hit> {
        self.hits.iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Hit;
    type IntoIter = std::slice::Iter<'a, Hit>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ResultSet {
    type Item = Hit;
    type IntoIter = std::vec::IntoIter<Hit>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.into_iter()
    }
}
