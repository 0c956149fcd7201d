//! The search request builder and dispatcher.
//!
//! A [`Search`] accumulates a scope, request options, and a query across
//! calls, then turns them into one `GET <path>` request per
//! [`search`](Search::search) or [`count`](Search::count).
//!
//! ```
//! # tokio_test::block_on(async {
//! use std::sync::Arc;
//! use trawl_search::{MockTransport, Search};
//!
//! let transport = Arc::new(MockTransport::new());
//! let mut search = Search::new(transport.clone());
//! search.add_index("tweets")?.add_type("tweet")?;
//!
//! search.search("kimchy", 10u64).await?;
//!
//! let sent = transport.last_request().unwrap();
//! assert_eq!(sent.path, "tweets/tweet/_search");
//! assert_eq!(sent.body["size"], 10);
//! # Ok::<(), trawl_core::Error>(())
//! # }).unwrap();
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use trawl_core::{Error, HasName, Result};
use trawl_query::{Query, QueryInput};

use crate::call::{self, CallOptions};
use crate::options::{OptionMap, OptionValue, SearchOption, SearchOptions, SearchType};
use crate::result_set::ResultSet;
use crate::scope::Scope;
use crate::transport::{Method, Transport};

/// Anything that can run a search or a count.
#[async_trait]
pub trait Searchable: Send {
    /// Runs a search and returns its hits.
    async fn search(&mut self, query: QueryInput, options: CallOptions) -> Result<ResultSet>;

    /// Returns the number of documents matching `query`.
    async fn count(&mut self, query: QueryInput) -> Result<u64>;
}

/// Builder for search and count requests.
///
/// State persists across calls: indices and types only accumulate, options
/// stay until replaced, and the current query is reused when a call passes
/// an empty one.
pub struct Search {
    transport: Arc<dyn Transport>,
    scope: Scope,
    options: SearchOptions,
    query: Option<Query>,
}

impl Search {
    /// Creates a builder that sends through `transport`.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            scope: Scope::new(),
            options: SearchOptions::new(),
            query: None,
        }
    }

    /// Builds a new search from an existing searchable.
    ///
    /// # Errors
    ///
    /// Always [`Error::UnsupportedConversion`]; no searchable exposes the
    /// state a builder would need.
    pub fn create(_searchable: &dyn Searchable) -> Result<Self> {
        Err(Error::unsupported_conversion(
            "a search cannot be created from another searchable",
        ))
    }

    /// The transport requests go through.
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    // ------------------------------------------------------------------
    // Scope
    // ------------------------------------------------------------------

    /// Appends an index. See [`Scope::add_index`].
    pub fn add_index<N: HasName + ?Sized>(&mut self, index: &N) -> Result<&mut Self> {
        self.scope.add_index(index)?;
        Ok(self)
    }

    /// Appends indices in order. See [`Scope::add_indices`].
    pub fn add_indices<I>(&mut self, indices: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: HasName,
    {
        self.scope.add_indices(indices)?;
        Ok(self)
    }

    /// Appends a type. See [`Scope::add_type`].
    pub fn add_type<N: HasName + ?Sized>(&mut self, doc_type: &N) -> Result<&mut Self> {
        self.scope.add_type(doc_type)?;
        Ok(self)
    }

    /// Appends types in order. See [`Scope::add_types`].
    pub fn add_types<I>(&mut self, types: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: HasName,
    {
        self.scope.add_types(types)?;
        Ok(self)
    }

    /// Index names in insertion order.
    pub fn indices(&self) -> &[String] {
        self.scope.indices()
    }

    /// Type names in insertion order.
    pub fn types(&self) -> &[String] {
        self.scope.types()
    }

    /// Returns `true` if at least one index was added.
    pub fn has_indices(&self) -> bool {
        self.scope.has_indices()
    }

    /// Returns `true` if at least one type was added.
    pub fn has_types(&self) -> bool {
        self.scope.has_types()
    }

    /// The accumulated scope.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Request path for the current scope.
    pub fn path(&self) -> String {
        self.scope.path()
    }

    // ------------------------------------------------------------------
    // Options
    // ------------------------------------------------------------------

    /// See [`SearchOptions::set_option`].
    pub fn set_option(&mut self, key: &str, value: impl Into<Value>) -> Result<&mut Self> {
        self.options.set_option(key, value)?;
        Ok(self)
    }

    /// See [`SearchOptions::set_options`].
    pub fn set_options(&mut self, options: Map<String, Value>) -> Result<&mut Self> {
        self.options.set_options(options)?;
        Ok(self)
    }

    /// See [`SearchOptions::add_option`].
    pub fn add_option(&mut self, key: &str, value: impl Into<Value>) -> Result<&mut Self> {
        self.options.add_option(key, value)?;
        Ok(self)
    }

    /// See [`SearchOptions::has_option`].
    pub fn has_option(&self, key: &str) -> bool {
        self.options.has_option(key)
    }

    /// See [`SearchOptions::get_option`].
    pub fn get_option(&self, key: &str) -> Result<&OptionValue> {
        self.options.get_option(key)
    }

    /// The options that the next search will transmit.
    pub fn options(&self) -> &OptionMap {
        self.options.options()
    }

    /// Removes every option.
    pub fn clear_options(&mut self) -> &mut Self {
        self.options.clear_options();
        self
    }

    // ------------------------------------------------------------------
    // Query
    // ------------------------------------------------------------------

    /// Normalizes `query` and makes it the current query.
    pub fn set_query(&mut self, query: impl Into<QueryInput>) -> &mut Self {
        self.query = Some(Query::create(query));
        self
    }

    /// The current query, or match-all when none has been set.
    pub fn query(&self) -> Cow<'_, Query> {
        match &self.query {
            Some(query) => Cow::Borrowed(query),
            None => Cow::Owned(Query::match_all()),
        }
    }

    /// Mutable access to the current query, storing match-all if unset.
    pub fn query_mut(&mut self) -> &mut Query {
        self.query.get_or_insert_with(Query::match_all)
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Applies the two arguments of a search call to the builder state.
    ///
    /// A non-empty `query` replaces the current one. A limit goes to the
    /// query. An option map has `limit` and `explain` redirected to the query
    /// and replaces the stored options with the rest.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] for a malformed `limit` or `explain`, and
    /// [`Error::InvalidOption`] for an unknown option key.
    pub fn apply_call(&mut self, query: QueryInput, options: CallOptions) -> Result<&mut Self> {
        self.apply_query(query);

        match options {
            CallOptions::None => {}
            CallOptions::Limit(limit) => {
                self.query_mut().set_limit(limit);
            }
            CallOptions::Map(mut map) => {
                let controls = call::extract_body_controls(&mut map)?;
                if let Some(limit) = controls.limit {
                    self.query_mut().set_limit(limit);
                }
                if let Some(explain) = controls.explain {
                    self.query_mut().set_explain(explain);
                }
                self.options.set_options(map)?;
            }
        }
        Ok(self)
    }

    /// Sends a search request and wraps the reply.
    ///
    /// `options` accepts [`CallOptions::None`], an integer limit,
    /// or an option map.
    ///
    /// # Errors
    ///
    /// Argument errors from [`apply_call`](Self::apply_call); transport
    /// errors are returned unchanged.
    pub async fn search(
        &mut self,
        query: impl Into<QueryInput>,
        options: impl Into<CallOptions>,
    ) -> Result<ResultSet> {
        self.apply_call(query.into(), options.into())?;

        let path = self.path();
        let query = self.query_mut().clone();
        log::debug!(
            "search via {}: GET {path} ({} option(s))",
            self.transport.name(),
            self.options.options().len()
        );

        let response = self
            .transport
            .request(&path, Method::Get, &query.to_value(), self.options.options())
            .await?;
        Ok(ResultSet::new(response, query))
    }

    /// Counts documents matching `query`.
    ///
    /// Sends `search_type=count` as the only option. Stored options are
    /// neither sent nor modified.
    pub async fn count(&mut self, query: impl Into<QueryInput>) -> Result<u64> {
        self.apply_query(query.into());

        let path = self.path();
        let query = self.query_mut().clone();
        let params = OptionMap::single(SearchOption::SearchType, SearchType::Count);
        log::debug!("count via {}: GET {path}", self.transport.name());

        let response = self
            .transport
            .request(&path, Method::Get, &query.to_value(), &params)
            .await?;
        Ok(ResultSet::new(response, query).total_hits())
    }

    fn apply_query(&mut self, query: QueryInput) {
        if !query.is_empty() {
            self.set_query(query);
        }
    }
}

#[async_trait]
impl Searchable for Search {
    async fn search(&mut self, query: QueryInput, options: CallOptions) -> Result<ResultSet> {
        Search::search(self, query, options).await
    }

    async fn count(&mut self, query: QueryInput) -> Result<u64> {
        Search::count(self, query).await
    }
}

impl fmt::Debug for Search {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Search")
            .field("transport", &self.transport.name())
            .field("scope", &self.scope)
            .field("options", &self.options)
            .field("query", &self.query)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use serde_json::json;
    use trawl_core::Index;

    fn setup() -> (Arc<MockTransport>, Search) {
        let transport = Arc::new(MockTransport::new());
        let search = Search::new(transport.clone());
        (transport, search)
    }

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn test_construct() {
        let (_, search) = setup();
        assert_eq!(search.transport().name(), "mock");
        assert!(search.indices().is_empty());
        assert!(search.types().is_empty());
        assert!(search.options().is_empty());
    }

    #[test]
    fn test_scope_delegates() {
        let (_, mut search) = setup();
        let index = Index::new("test1");
        search
            .add_index(&index)
            .unwrap()
            .add_indices(["test2", "test3"])
            .unwrap()
            .add_type("type1")
            .unwrap()
            .add_types([index.doc_type("type2")])
            .unwrap();
        assert_eq!(search.indices(), ["test1", "test2", "test3"]);
        assert_eq!(search.types(), ["type1", "type2"]);
        assert!(search.has_indices());
        assert!(search.has_types());
        assert_eq!(search.path(), "test1,test2,test3/type1,type2/_search");
    }

    #[test]
    fn test_default_query_is_stable() {
        let (_, search) = setup();
        let first = search.query().into_owned();
        let second = search.query().into_owned();
        assert_eq!(first, Query::match_all());
        assert_eq!(first, second);
    }

    #[test]
    fn test_query_readable_through_shared_reference() {
        let (_, mut search) = setup();
        let shared: &Search = &search;
        assert_eq!(*shared.query(), Query::match_all());

        search.set_query("bunny");
        let shared: &Search = &search;
        assert!(matches!(shared.query(), Cow::Borrowed(_)));
        assert_eq!(*shared.query(), Query::create("bunny"));
    }

    #[test]
    fn test_path_is_idempotent() {
        let (_, mut search) = setup();
        search.add_index("a").unwrap();
        assert_eq!(search.path(), search.path());
    }

    #[test]
    fn test_set_query_normalizes() {
        let (_, mut search) = setup();
        search.set_query("bunny");
        assert_eq!(
            search.query().to_value(),
            json!({"query": {"query_string": {"query": "bunny"}}})
        );
    }

    #[test]
    fn test_apply_call_limit_shorthand() {
        let (_, mut search) = setup();
        search.set_option("routing", "r1").unwrap();
        search.apply_call(QueryInput::Empty, CallOptions::Limit(3)).unwrap();
        assert_eq!(search.query().limit(), Some(3));
        assert!(search.has_option("routing"));
    }

    #[test]
    fn test_apply_call_option_map() {
        let (_, mut search) = setup();
        search
            .apply_call(
                "test".into(),
                CallOptions::Map(map(json!({"limit": 5, "explain": true, "routing": "r1,r2"}))),
            )
            .unwrap();
        assert_eq!(search.query().limit(), Some(5));
        assert!(search.query().explain());
        assert!(!search.has_option("limit"));
        assert!(!search.has_option("explain"));
        assert_eq!(
            search.get_option("routing").unwrap(),
            &OptionValue::Single(json!("r1,r2"))
        );
    }

    #[test]
    fn test_apply_call_unknown_option() {
        let (_, mut search) = setup();
        let err = search
            .apply_call(QueryInput::Empty, CallOptions::Map(map(json!({"color": "blue"}))))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidOption { ref key, .. } if key == "color"));
    }

    #[test]
    fn test_empty_query_keeps_current() {
        let (_, mut search) = setup();
        search.set_query("kept");
        search.apply_call("".into(), CallOptions::None).unwrap();
        assert_eq!(*search.query(), Query::create("kept"));
    }

    #[test]
    fn test_create_is_unsupported() {
        let (_, search) = setup();
        let err = Search::create(&search).unwrap_err();
        assert!(matches!(err, Error::UnsupportedConversion { .. }));
    }

    #[tokio::test]
    async fn test_search_dispatches_get() {
        let (transport, mut search) = setup();
        search.add_index("test").unwrap().add_type("helloworld").unwrap();
        transport.push_body(json!({
            "took": 1,
            "hits": {"total": 1, "hits": [{"_id": "1", "_score": 1.0}]}
        }));

        let results = search.search("hans", CallOptions::None).await.unwrap();
        assert_eq!(results.count(), 1);
        assert_eq!(results.total_hits(), 1);

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Get);
        assert_eq!(sent.path, "test/helloworld/_search");
        assert_eq!(sent.body, json!({"query": {"query_string": {"query": "hans"}}}));
        assert!(sent.params.is_empty());
    }

    #[tokio::test]
    async fn test_count_forces_search_type() {
        let (transport, mut search) = setup();
        search.set_option("search_type", "scan").unwrap();
        transport.push_body(json!({"hits": {"total": 7, "hits": []}}));

        assert_eq!(search.count("").await.unwrap(), 7);

        let sent = transport.last_request().unwrap();
        assert_eq!(
            sent.params,
            OptionMap::single(SearchOption::SearchType, SearchType::Count)
        );
        assert_eq!(
            search.get_option("search_type").unwrap(),
            &OptionValue::Single(json!("scan"))
        );
    }

    #[tokio::test]
    async fn test_transport_error_passes_through() {
        let (transport, mut search) = setup();
        transport.push_error(Error::transport_status(500, "boom"));
        let err = search.search("", CallOptions::None).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_searchable_trait_object() {
        let (transport, mut search) = setup();
        let searchable: &mut dyn Searchable = &mut search;
        searchable
            .search(QueryInput::from("x"), CallOptions::Limit(2))
            .await
            .unwrap();
        searchable.count(QueryInput::Empty).await.unwrap();
        assert_eq!(transport.request_count(), 2);
    }
}
