//! Common-terms clause.
//!
//! Splits the query terms into low- and high-frequency groups using a
//! cutoff frequency; high-frequency terms only contribute to scoring.

use serde_json::{Map, Value};

use super::{Operator, QueryClause, field_clause};

/// Common-terms query on a single field.
///
/// ```
/// use trawl_query::dsl::{Common, Operator, QueryClause};
/// use serde_json::json;
///
/// let mut query = Common::new("body", "test query", 0.001);
/// query.set_low_frequency_operator(Operator::And);
///
/// assert_eq!(
///     query.to_value(),
///     json!({"common": {"body": {
///         "query": "test query",
///         "cutoff_frequency": 0.001,
///         "low_freq_operator": "and"
///     }}})
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Common {
    field: String,
    params: Map<String, Value>,
}

impl Common {
    /// Creates a clause for `query` on `field` with the given cutoff frequency.
    pub fn new(field: impl Into<String>, query: impl Into<String>, cutoff_frequency: f64) -> Self {
        let mut common = Self {
            field: field.into(),
            params: Map::new(),
        };
        common.set_query(query).set_cutoff_frequency(cutoff_frequency);
        common
    }

    /// Returns the target field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Sets the target field.
    pub fn set_field(&mut self, field: impl Into<String>) -> &mut Self {
        self.field = field.into();
        self
    }

    /// Sets the query text.
    pub fn set_query(&mut self, query: impl Into<String>) -> &mut Self {
        let query: String = query.into();
        self.set_param("query", query)
    }

    /// Sets the frequency above which a term counts as common.
    ///
    /// Absolute when >= 1, relative to the document count otherwise.
    pub fn set_cutoff_frequency(&mut self, frequency: f64) -> &mut Self {
        self.set_param("cutoff_frequency", frequency)
    }

    /// Sets the operator for low-frequency terms.
    pub fn set_low_frequency_operator(&mut self, op: Operator) -> &mut Self {
        self.set_param("low_freq_operator", op)
    }

    /// Sets the operator for high-frequency terms.
    pub fn set_high_frequency_operator(&mut self, op: Operator) -> &mut Self {
        self.set_param("high_frequency_operator", op)
    }

    /// Sets how many low-frequency terms must match.
    pub fn set_minimum_should_match(&mut self, minimum: u32) -> &mut Self {
        self.set_param("minimum_should_match", minimum)
    }

    /// Sets the relevance boost.
    pub fn set_boost(&mut self, boost: f64) -> &mut Self {
        self.set_param("boost", boost)
    }

    /// Sets the analyzer applied to the query text.
    pub fn set_analyzer(&mut self, analyzer: impl Into<String>) -> &mut Self {
        let analyzer: String = analyzer.into();
        self.set_param("analyzer", analyzer)
    }

    /// Enables or disables the coordination factor.
    pub fn set_disable_coord(&mut self, disable: bool) -> &mut Self {
        self.set_param("disable_coord", disable)
    }

    fn set_param(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.params.insert(key.to_string(), value.into());
        self
    }
}

impl QueryClause for Common {
    fn to_value(&self) -> Value {
        field_clause("common", &self.field, self.params.clone())
    }
}
