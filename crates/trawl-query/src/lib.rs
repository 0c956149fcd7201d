//! # trawl-query
//!
//! Query DSL and canonical query body for Trawl.
//!
//! This crate provides:
//! - [`dsl`]: query clauses (`match_all`, `query_string`, `term`, `common`)
//! - [`QueryInput`]: the shapes a caller may hand over as "the query"
//! - [`Query`]: the normalized request body, with limit/explain/paging setters
//!
//! # Example
//!
//! ```
//! use trawl_query::{Query, QueryInput};
//! use serde_json::json;
//!
//! // Nothing given: match everything
//! assert_eq!(
//!     Query::create(QueryInput::Empty).to_value(),
//!     json!({"query": {"match_all": {}}})
//! );
//!
//! // Free text becomes a query_string clause
//! let mut query = Query::create("farrelley");
//! query.set_limit(1);
//! assert_eq!(query.limit(), Some(1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod dsl;
pub mod input;
pub mod query;

pub use dsl::{Common, MatchAll, Operator, QueryClause, QueryString, Term};
pub use input::QueryInput;
pub use query::Query;
