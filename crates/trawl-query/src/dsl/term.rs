//! Exact-value term clause.

use serde_json::{Map, Value};

use super::{QueryClause, field_clause};

/// Matches documents whose field holds exactly the given value.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    field: String,
    value: Value,
    boost: Option<f64>,
}

impl Term {
    /// Creates a term clause for `field == value`.
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            boost: None,
        }
    }

    /// Sets the relevance boost.
    pub fn set_boost(&mut self, boost: f64) -> &mut Self {
        self.boost = Some(boost);
        self
    }
}

impl QueryClause for Term {
    fn to_value(&self) -> Value {
        let mut params = Map::new();
        params.insert("value".to_string(), self.value.clone());
        if let Some(boost) = self.boost {
            params.insert("boost".to_string(), boost.into());
        }
        field_clause("term", &self.field, params)
    }
}
