//! The `options` argument of `search`.
//!
//! Callers may pass nothing, a bare integer (a hit limit), or a map of
//! request options. The map may also carry `limit` and `explain`, which
//! belong to the query body and are pulled out before the remaining keys are
//! treated as transmitted options.

use serde_json::{Map, Value};
use trawl_core::{Error, Result};

/// Key of an option map redirected to [`Query::set_limit`](trawl_query::Query::set_limit).
pub const LIMIT_KEY: &str = "limit";

/// Key of an option map redirected to [`Query::set_explain`](trawl_query::Query::set_explain).
pub const EXPLAIN_KEY: &str = "explain";

/// Second argument of a search call, classified once at the boundary.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CallOptions {
    /// Leave options and query controls untouched.
    #[default]
    None,
    /// Shorthand for a hit limit.
    Limit(u64),
    /// Request options, possibly including `limit` and `explain`.
    Map(Map<String, Value>),
}

impl CallOptions {
    /// Classifies a dynamic JSON value.
    ///
    /// `null` is no options, a non-negative integer is a limit, an object is
    /// an option map. Anything else is [`Error::InvalidInput`].
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::None),
            Value::Number(n) => n.as_u64().map(Self::Limit).ok_or_else(|| {
                Error::invalid_input(format!("limit must be a non-negative integer, got {n}"))
            }),
            Value::Object(map) => Ok(Self::Map(map)),
            other => Err(Error::invalid_input(format!(
                "options must be a limit or an option map, got {other}"
            ))),
        }
    }
}

impl From<u64> for CallOptions {
    fn from(limit: u64) -> Self {
        Self::Limit(limit)
    }
}

impl From<Map<String, Value>> for CallOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self::Map(map)
    }
}

/// Query-body controls extracted from an option map.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct BodyControls {
    pub(crate) limit: Option<u64>,
    pub(crate) explain: Option<bool>,
}

/// Removes `limit` and `explain` from `map` and validates them.
///
/// `null` values are dropped as if absent.
pub(crate) fn extract_body_controls(map: &mut Map<String, Value>) -> Result<BodyControls> {
    let limit = match map.remove(LIMIT_KEY) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value.as_u64().ok_or_else(|| {
            Error::invalid_input(format!("limit must be a non-negative integer, got {value}"))
        })?),
    };
    let explain = match map.remove(EXPLAIN_KEY) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value.as_bool().ok_or_else(|| {
            Error::invalid_input(format!("explain must be a boolean, got {value}"))
        })?),
    };
    Ok(BodyControls { limit, explain })
}
