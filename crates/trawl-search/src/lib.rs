//! Search request assembly and dispatch for Trawl.
//!
//! This crate turns a caller's intent (indices, types, a query, and request
//! options) into one `GET` request against a search service, and wraps the
//! reply in a typed [`ResultSet`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      trawl-search                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Search (builder + dispatcher)                              │
//! │  ├── Scope          indices / types, call order kept        │
//! │  ├── SearchOptions  allow-listed request options            │
//! │  ├── Query          current body (trawl-query)              │
//! │  └── CallOptions    limit shorthand or option map           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  path::build        scope → `<indices>/<types>/_search`     │
//! │  Transport trait    MockTransport here, HTTP in trawl-client│
//! │  ResultSet / Hit    typed view over the response            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! # tokio_test::block_on(async {
//! use std::sync::Arc;
//! use serde_json::json;
//! use trawl_search::{CallOptions, MockTransport, Search};
//!
//! let transport = Arc::new(MockTransport::new());
//! transport.push_body(json!({"hits": {"total": 3, "hits": []}}));
//!
//! let mut search = Search::new(transport.clone());
//! search.add_indices(["tweets", "users"])?;
//!
//! let options = CallOptions::from_value(json!({"limit": 5, "routing": "r1,r2"}))?;
//! let results = search.search("kimchy", options).await?;
//! assert_eq!(results.total_hits(), 3);
//!
//! let sent = transport.last_request().unwrap();
//! assert_eq!(sent.path, "tweets,users/_search");
//! assert_eq!(sent.body["size"], 5);
//! # Ok::<(), trawl_core::Error>(())
//! # }).unwrap();
//! ```

pub mod call;
pub mod options;
pub mod path;
pub mod result_set;
pub mod scope;
pub mod search;
pub mod transport;

mod proptests;

// Re-exports
pub use call::CallOptions;
pub use options::{OptionMap, OptionValue, SearchOption, SearchOptions, SearchType};
pub use result_set::{Hit, ResultSet};
pub use scope::Scope;
pub use search::{Search, Searchable};
pub use transport::{Method, MockTransport, RawResponse, RecordedRequest, Transport};

pub use trawl_query::{Query, QueryInput};
