//! Free-text `query_string` clause.
//!
//! This is what a plain text query normalizes to.

use serde_json::{Map, Value};

use super::{Operator, QueryClause};

/// Parses free text with the service's query-string syntax.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryString {
    query: String,
    default_field: Option<String>,
    default_operator: Option<Operator>,
    fields: Vec<String>,
    analyzer: Option<String>,
}

impl QueryString {
    /// Creates a clause for the given text.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            default_field: None,
            default_operator: None,
            fields: Vec::new(),
            analyzer: None,
        }
    }

    /// Returns the query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Sets the field searched when the text names none.
    pub fn set_default_field(&mut self, field: impl Into<String>) -> &mut Self {
        self.default_field = Some(field.into());
        self
    }

    /// Sets how terms without an explicit operator are combined.
    pub fn set_default_operator(&mut self, op: Operator) -> &mut Self {
        self.default_operator = Some(op);
        self
    }

    /// Searches the given fields instead of the default field.
    pub fn set_fields<I, S>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the analyzer applied to the text.
    pub fn set_analyzer(&mut self, analyzer: impl Into<String>) -> &mut Self {
        self.analyzer = Some(analyzer.into());
        self
    }
}

impl QueryClause for QueryString {
    fn to_value(&self) -> Value {
        let mut params = Map::new();
        params.insert("query".to_string(), self.query.clone().into());
        if let Some(ref field) = self.default_field {
            params.insert("default_field".to_string(), field.clone().into());
        }
        if let Some(op) = self.default_operator {
            params.insert("default_operator".to_string(), op.into());
        }
        if !self.fields.is_empty() {
            params.insert("fields".to_string(), self.fields.clone().into());
        }
        if let Some(ref analyzer) = self.analyzer {
            params.insert("analyzer".to_string(), analyzer.clone().into());
        }

        let mut clause = Map::new();
        clause.insert("query_string".to_string(), Value::Object(params));
        Value::Object(clause)
    }
}
