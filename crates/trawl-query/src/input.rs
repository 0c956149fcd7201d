//! Accepted query input shapes.

use serde_json::{Map, Value};
use trawl_core::{Error, Result};

use crate::dsl::{Common, MatchAll, QueryClause, QueryString, Term};
use crate::query::Query;

/// A query as handed over by a caller, before normalization.
///
/// The variant is decided once, at the boundary; [`Query::create`] turns
/// every variant into the canonical [`Query`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryInput {
    /// No query given; leaves the current query in place.
    #[default]
    Empty,
    /// Free text, interpreted as a `query_string` query.
    Text(String),
    /// A raw request body.
    Raw(Map<String, Value>),
    /// A DSL clause rendered to its JSON subtree.
    Clause(Value),
    /// A query that is already built.
    Query(Query),
}

impl QueryInput {
    /// Classifies a dynamic JSON value.
    ///
    /// `null` is empty, a string is text, an object is a raw body. Any other
    /// shape is rejected with [`Error::InvalidInput`].
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::Empty),
            Value::String(text) => Ok(Self::Text(text)),
            Value::Object(map) => Ok(Self::Raw(map)),
            other => Err(Error::invalid_input(format!(
                "cannot build a query from {other}"
            ))),
        }
    }

    /// Renders a DSL clause.
    pub fn clause<C: QueryClause + ?Sized>(clause: &C) -> Self {
        Self::Clause(clause.to_value())
    }

    /// Returns whether this is the "no query given" sentinel.
    ///
    /// An empty string counts as no query; an empty map does not, and
    /// resets the current query to match-all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for QueryInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for QueryInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Map<String, Value>> for QueryInput {
    fn from(map: Map<String, Value>) -> Self {
        Self::Raw(map)
    }
}

impl From<Query> for QueryInput {
    fn from(query: Query) -> Self {
        Self::Query(query)
    }
}

impl From<MatchAll> for QueryInput {
    fn from(clause: MatchAll) -> Self {
        Self::clause(&clause)
    }
}

impl From<QueryString> for QueryInput {
    fn from(clause: QueryString) -> Self {
        Self::clause(&clause)
    }
}

impl From<Term> for QueryInput {
    fn from(clause: Term) -> Self {
        Self::clause(&clause)
    }
}

impl From<Common> for QueryInput {
    fn from(clause: Common) -> Self {
        Self::clause(&clause)
    }
}
