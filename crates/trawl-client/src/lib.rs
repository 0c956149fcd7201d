//! # trawl-client
//!
//! HTTP access to a search service for Trawl:
//! - [`ClientConfig`]: service URL, timeouts, and auth token, loaded from TOML
//! - [`HttpTransport`]: the [`Transport`](trawl_search::Transport) on `reqwest`
//! - [`Client`]: hands out [`Search`](trawl_search::Search) builders bound
//!   to one shared transport

#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod http;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use http::HttpTransport;
