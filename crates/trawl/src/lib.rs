//! Trawl search request builder — umbrella crate.
//!
//! This crate re-exports all Trawl components for convenience.
//! The HTTP client is behind the `client` feature (on by default).

#![doc = include_str!("../README.md")]

pub use trawl_core as core;
pub use trawl_query as query;
pub use trawl_search as search;

#[cfg(feature = "client")]
pub use trawl_client as client;

pub use trawl_core::{Error, Result};
pub use trawl_search::{CallOptions, Query, QueryInput, ResultSet, Search};

#[cfg(feature = "client")]
pub use trawl_client::{Client, ClientConfig};
