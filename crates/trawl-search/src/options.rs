//! Request options transmitted alongside the query.
//!
//! Options travel in the query string, not in the body. Only a fixed set of
//! keys is accepted; anything else fails immediately with
//! [`Error::InvalidOption`], before a request is ever built.
//!
//! # Example
//!
//! ```
//! use trawl_search::options::{OptionValue, SearchOptions};
//! use serde_json::json;
//!
//! let mut options = SearchOptions::new();
//! options.set_option("routing", "r1,r2").unwrap();
//! options.add_option("preference", "_local").unwrap();
//!
//! assert_eq!(
//!     options.get_option("routing").unwrap(),
//!     &OptionValue::Single(json!("r1,r2"))
//! );
//! assert!(options.set_option("invalid_key", 1).is_err());
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use trawl_core::{Error, Result};

// ============================================================================
// SearchOption
// ============================================================================

/// The request options the search endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOption {
    /// Execution strategy, see [`SearchType`].
    SearchType,
    /// Shard routing values.
    Routing,
    /// Which shard copies to prefer.
    Preference,
    /// Return the version of each hit.
    Version,
    /// Per-request time budget, enforced by the service.
    Timeout,
    /// Offset of the first hit.
    From,
    /// Number of hits to return.
    Size,
}

impl SearchOption {
    /// Every accepted option, in declaration order.
    pub const ALL: [SearchOption; 7] = [
        Self::SearchType,
        Self::Routing,
        Self::Preference,
        Self::Version,
        Self::Timeout,
        Self::From,
        Self::Size,
    ];

    /// Returns the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SearchType => "search_type",
            Self::Routing => "routing",
            Self::Preference => "preference",
            Self::Version => "version",
            Self::Timeout => "timeout",
            Self::From => "from",
            Self::Size => "size",
        }
    }
}

impl FromStr for SearchOption {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| Error::invalid_option(s))
    }
}

impl fmt::Display for SearchOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks that `key` names an accepted option.
pub fn validate(key: &str) -> Result<SearchOption> {
    key.parse()
}

// ============================================================================
// SearchType
// ============================================================================

/// Values accepted by the `search_type` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    /// Only count hits; no documents are returned.
    Count,
    /// Scroll through results without scoring.
    Scan,
    /// Gather term statistics first, then query and fetch.
    DfsQueryThenFetch,
    /// Gather term statistics first, then query and fetch in one pass.
    DfsQueryAndFetch,
    /// Query all shards, then fetch the top hits.
    QueryThenFetch,
    /// Query and fetch in one pass per shard.
    QueryAndFetch,
}

impl SearchType {
    /// Returns the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Scan => "scan",
            Self::DfsQueryThenFetch => "dfs_query_then_fetch",
            Self::DfsQueryAndFetch => "dfs_query_and_fetch",
            Self::QueryThenFetch => "query_then_fetch",
            Self::QueryAndFetch => "query_and_fetch",
        }
    }
}

impl FromStr for SearchType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "count" => Ok(Self::Count),
            "scan" => Ok(Self::Scan),
            "dfs_query_then_fetch" => Ok(Self::DfsQueryThenFetch),
            "dfs_query_and_fetch" => Ok(Self::DfsQueryAndFetch),
            "query_then_fetch" => Ok(Self::QueryThenFetch),
            "query_and_fetch" => Ok(Self::QueryAndFetch),
            other => Err(Error::invalid_input(format!("unknown search type '{other}'"))),
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SearchType> for Value {
    fn from(search_type: SearchType) -> Self {
        Value::String(search_type.as_str().to_string())
    }
}

// ============================================================================
// OptionValue / OptionMap
// ============================================================================

/// A stored option value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Set with `set_option`.
    Single(Value),
    /// Accumulated with `add_option`.
    Multi(Vec<Value>),
}

impl OptionValue {
    /// Renders the value for a query string; multiple values are comma-joined.
    pub fn to_param(&self) -> String {
        match self {
            Self::Single(value) => render(value),
            Self::Multi(values) => values.iter().map(render).collect::<Vec<_>>().join(","),
        }
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Snapshot of the options to transmit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionMap(BTreeMap<SearchOption, OptionValue>);

impl OptionMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map holding a single option.
    pub fn single(option: SearchOption, value: impl Into<Value>) -> Self {
        let mut map = Self::new();
        map.0.insert(option, OptionValue::Single(value.into()));
        map
    }

    /// Returns the stored value for an option.
    pub fn get(&self, option: SearchOption) -> Option<&OptionValue> {
        self.0.get(&option)
    }

    /// Returns `true` if the option is present.
    pub fn contains(&self, option: SearchOption) -> bool {
        self.0.contains_key(&option)
    }

    /// Number of options present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no option is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates options in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&SearchOption, &OptionValue)> {
        self.0.iter()
    }

    /// Renders `(key, value)` pairs for a query string.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(option, value)| (option.as_str().to_string(), value.to_param()))
            .collect()
    }
}

// ============================================================================
// SearchOptions (registry)
// ============================================================================

/// Validating store for request options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    options: OptionMap,
}

impl SearchOptions {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an option, replacing any previous value.
    ///
    /// A `null` value unsets the option.
    pub fn set_option(&mut self, key: &str, value: impl Into<Value>) -> Result<&mut Self> {
        let option = validate(key)?;
        match value.into() {
            Value::Null => {
                self.options.0.remove(&option);
            }
            value => {
                self.options.0.insert(option, OptionValue::Single(value));
            }
        }
        Ok(self)
    }

    /// Clears all options, then sets each pair in turn.
    ///
    /// Pairs with a `null` value are left unset. An invalid key aborts the call. Pairs processed before it stay set
    /// and the previous options are gone.
    pub fn set_options(&mut self, options: Map<String, Value>) -> Result<&mut Self> {
        self.clear_options();
        for (key, value) in options {
            self.set_option(&key, value)?;
        }
        Ok(self)
    }

    /// Appends a value under an option, accumulating multiple values.
    ///
    /// A value previously stored with [`set_option`](Self::set_option) becomes
    /// the first element of the list. Adding `null` changes nothing.
    pub fn add_option(&mut self, key: &str, value: impl Into<Value>) -> Result<&mut Self> {
        let option = validate(key)?;
        let value = value.into();
        if value.is_null() {
            return Ok(self);
        }
        let entry = self
            .options
            .0
            .entry(option)
            .or_insert_with(|| OptionValue::Multi(Vec::new()));
        match &mut *entry {
            OptionValue::Multi(values) => values.push(value),
            OptionValue::Single(previous) => {
                let previous = previous.take();
                *entry = OptionValue::Multi(vec![previous, value]);
            }
        }
        Ok(self)
    }

    /// Returns `true` if the option was set.
    ///
    /// Unknown keys are simply absent.
    pub fn has_option(&self, key: &str) -> bool {
        key.parse::<SearchOption>()
            .map(|option| self.options.contains(option))
            .unwrap_or(false)
    }

    /// Returns a stored option.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOption`] when the key is unknown or was never set.
    pub fn get_option(&self, key: &str) -> Result<&OptionValue> {
        let option = validate(key)?;
        self.options
            .get(option)
            .ok_or_else(|| Error::option_not_set(key))
    }

    /// Returns the full option snapshot.
    pub fn options(&self) -> &OptionMap {
        &self.options
    }

    /// Removes every option.
    pub fn clear_options(&mut self) -> &mut Self {
        self.options = OptionMap::new();
        self
    }
}
