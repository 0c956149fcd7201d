//! The canonical search query.
//!
//! A [`Query`] is the request body sent to the `_search` endpoint: a JSON
//! object holding the `query` clause plus body-level controls such as
//! `size`, `from`, and `explain`. Every accepted input shape is normalized
//! into this one form by [`Query::create`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::dsl::{MatchAll, QueryClause, QueryString};
use crate::input::QueryInput;

const PARAM_QUERY: &str = "query";
const PARAM_SIZE: &str = "size";
const PARAM_FROM: &str = "from";
const PARAM_EXPLAIN: &str = "explain";
const PARAM_SORT: &str = "sort";
const PARAM_MIN_SCORE: &str = "min_score";
const PARAM_FIELDS: &str = "fields";

/// Normalized request body for a search or count request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query {
    params: Map<String, Value>,
}

impl Query {
    /// Creates an empty query body (no `query` clause).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query that matches every document.
    pub fn match_all() -> Self {
        Self::from_clause(&MatchAll::new())
    }

    /// Wraps a DSL clause as the `query` of a new body.
    pub fn from_clause<C: QueryClause + ?Sized>(clause: &C) -> Self {
        Self::from_clause_value(clause.to_value())
    }

    /// Wraps an already rendered clause as the `query` of a new body.
    pub fn from_clause_value(clause: Value) -> Self {
        let mut query = Self::new();
        query.params.insert(PARAM_QUERY.to_string(), clause);
        query
    }

    /// Uses a raw body verbatim.
    pub fn from_raw(params: Map<String, Value>) -> Self {
        Self { params }
    }

    /// Normalizes any accepted input shape into a canonical query.
    ///
    /// | Input | Result |
    /// |-------|--------|
    /// | empty, `""`, `{}` | match-all |
    /// | text | `query_string` clause |
    /// | raw map | the map as the body |
    /// | clause | the clause under `query` |
    /// | built query | unchanged |
    pub fn create(input: impl Into<QueryInput>) -> Self {
        match input.into() {
            QueryInput::Empty => Self::match_all(),
            QueryInput::Text(text) if text.is_empty() => Self::match_all(),
            QueryInput::Text(text) => Self::from_clause(&QueryString::new(text)),
            QueryInput::Raw(map) if map.is_empty() => Self::match_all(),
            QueryInput::Raw(map) => Self::from_raw(map),
            QueryInput::Clause(clause) => Self::from_clause_value(clause),
            QueryInput::Query(query) => query,
        }
    }

    /// Replaces the `query` clause.
    pub fn set_query<C: QueryClause + ?Sized>(&mut self, clause: &C) -> &mut Self {
        self.set_param(PARAM_QUERY, clause.to_value())
    }

    /// Caps the number of hits returned (`size`).
    pub fn set_limit(&mut self, limit: u64) -> &mut Self {
        self.set_param(PARAM_SIZE, limit)
    }

    /// Sets the offset of the first hit returned (`from`).
    pub fn set_from(&mut self, from: u64) -> &mut Self {
        self.set_param(PARAM_FROM, from)
    }

    /// Requests a score explanation per hit.
    pub fn set_explain(&mut self, explain: bool) -> &mut Self {
        self.set_param(PARAM_EXPLAIN, explain)
    }

    /// Sets the sort specification.
    pub fn set_sort(&mut self, sort: Value) -> &mut Self {
        self.set_param(PARAM_SORT, sort)
    }

    /// Drops hits scoring below `min_score`.
    pub fn set_min_score(&mut self, min_score: f64) -> &mut Self {
        self.set_param(PARAM_MIN_SCORE, min_score)
    }

    /// Restricts the stored fields returned per hit.
    pub fn set_fields<I, S>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<Value> = fields.into_iter().map(|f| Value::String(f.into())).collect();
        self.set_param(PARAM_FIELDS, fields)
    }

    /// Sets an arbitrary body parameter.
    pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let key = key.into();
        log::trace!("query param '{key}' set");
        self.params.insert(key, value.into());
        self
    }

    /// Returns a body parameter.
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// Returns the hit cap, if one is set.
    pub fn limit(&self) -> Option<u64> {
        self.param(PARAM_SIZE).and_then(Value::as_u64)
    }

    /// Returns the offset of the first hit, if one is set.
    pub fn offset(&self) -> Option<u64> {
        self.param(PARAM_FROM).and_then(Value::as_u64)
    }

    /// Returns whether explanations were requested.
    pub fn explain(&self) -> bool {
        self.param(PARAM_EXPLAIN)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Returns whether the body carries a `query` clause.
    pub fn has_query(&self) -> bool {
        self.params.contains_key(PARAM_QUERY)
    }

    /// Returns the body parameters.
    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }

    /// Renders the body as a JSON value.
    pub fn to_value(&self) -> Value {
        Value::Object(self.params.clone())
    }
}

impl From<Query> for Value {
    fn from(query: Query) -> Self {
        Value::Object(query.params)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::dsl::Term;
    use serde_json::json;

    #[test]
    fn test_match_all_default() {
        let query = Query::create(QueryInput::Empty);
        assert_eq!(query.to_value(), json!({"query": {"match_all": {}}}));
        assert_eq!(query, Query::match_all());
    }

    #[test]
    fn test_empty_shapes_normalize_to_match_all() {
        assert_eq!(Query::create(""), Query::match_all());
        assert_eq!(Query::create(Map::new()), Query::match_all());
    }

    #[test]
    fn test_text_becomes_query_string() {
        let query = Query::create("farrelley");
        assert_eq!(
            query.to_value(),
            json!({"query": {"query_string": {"query": "farrelley"}}})
        );
    }

    #[test]
    fn test_raw_map_used_verbatim() {
        let raw = json!({"query": {"term": {"user": "kimchy"}}, "size": 3});
        let Value::Object(map) = raw.clone() else {
            unreachable!()
        };
        let query = Query::create(map);
        assert_eq!(query.to_value(), raw);
        assert_eq!(query.limit(), Some(3));
    }

    #[test]
    fn test_clause_wrapped_under_query() {
        let query = Query::create(Term::new("user", "kimchy"));
        assert_eq!(
            query.to_value(),
            json!({"query": {"term": {"user": {"value": "kimchy"}}}})
        );
    }

    #[test]
    fn test_built_query_unchanged() {
        let mut built = Query::match_all();
        built.set_limit(7).set_explain(true);
        let query = Query::create(built.clone());
        assert_eq!(query, built);
    }

    #[test]
    fn test_limit_and_explain() {
        let mut query = Query::match_all();
        assert_eq!(query.limit(), None);
        assert!(!query.explain());

        query.set_limit(5).set_explain(true).set_from(10);
        assert_eq!(query.limit(), Some(5));
        assert_eq!(query.offset(), Some(10));
        assert!(query.explain());
        assert_eq!(
            query.to_value(),
            json!({"query": {"match_all": {}}, "size": 5, "from": 10, "explain": true})
        );
    }

    #[test]
    fn test_set_query_replaces_clause() {
        let mut query = Query::match_all();
        query.set_limit(2);
        query.set_query(&QueryString::new("bunny"));
        assert_eq!(
            query.param("query"),
            Some(&json!({"query_string": {"query": "bunny"}}))
        );
        assert_eq!(query.limit(), Some(2));
    }

    #[test]
    fn test_fields_sort_min_score() {
        let mut query = Query::new();
        assert!(!query.has_query());
        query
            .set_fields(["title", "user"])
            .set_sort(json!([{"date": "desc"}]))
            .set_min_score(0.5);
        assert_eq!(query.param("fields"), Some(&json!(["title", "user"])));
        assert_eq!(query.param("sort"), Some(&json!([{"date": "desc"}])));
        assert_eq!(query.param("min_score"), Some(&json!(0.5)));
    }

    #[test]
    fn test_serializes_transparently() {
        let mut query = Query::match_all();
        query.set_limit(1);
        let json = serde_json::to_string(&query).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, json!({"query": {"match_all": {}}, "size": 1}));
    }
}
