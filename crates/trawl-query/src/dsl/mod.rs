//! Query DSL clauses.
//!
//! Each clause renders to the JSON subtree the search service expects under
//! the `query` key of a request body, e.g. `{"match_all": {}}`.

mod common;
mod match_all;
mod query_string;
mod term;

pub use common::Common;
pub use match_all::MatchAll;
pub use query_string::QueryString;
pub use term::Term;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A query clause that can be rendered to its JSON form.
pub trait QueryClause {
    /// Renders the clause as `{<clause name>: {...}}`.
    fn to_value(&self) -> Value;
}

/// Renders `{<name>: {<field>: <params>}}`, the shape of field-level clauses.
pub(crate) fn field_clause(name: &str, field: &str, params: Map<String, Value>) -> Value {
    let mut inner = Map::new();
    inner.insert(field.to_string(), Value::Object(params));
    let mut outer = Map::new();
    outer.insert(name.to_string(), Value::Object(inner));
    Value::Object(outer)
}

/// Boolean operator used to combine terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Every term must match.
    And,
    /// Any term may match.
    #[default]
    Or,
}

impl Operator {
    /// Returns the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Operator> for Value {
    fn from(op: Operator) -> Self {
        Value::String(op.as_str().to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_wire_names() {
        assert_eq!(Operator::And.to_string(), "and");
        assert_eq!(Value::from(Operator::Or), Value::String("or".to_string()));
        assert_eq!(serde_json::to_string(&Operator::And).unwrap(), "\"and\"");
    }
}
