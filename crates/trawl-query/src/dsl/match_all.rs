use serde_json::{Value, json};

use super::QueryClause;

/// Matches every document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchAll;

impl MatchAll {
    /// Creates the clause.
    pub fn new() -> Self {
        Self
    }
}

impl QueryClause for MatchAll {
    fn to_value(&self) -> Value {
        json!({ "match_all": {} })
    }
}
