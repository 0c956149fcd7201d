//! # trawl-cli
//!
//! The `trawl` command-line client:
//! - `search`: run a query against indices and types and print the hits
//! - `count`: print the number of matching documents
//! - `path`: print the request path a scope resolves to
//! - `config`: locate, show, or create the configuration file

#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod error;

pub use cli::Cli;
pub use error::{Error, Result};
