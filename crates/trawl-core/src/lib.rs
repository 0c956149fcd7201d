//! Trawl Core — shared errors and name capabilities.
//!
//! This crate provides the foundational types used across all Trawl crates.
//! It has no internal Trawl dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`name`]: The [`HasName`] capability and the [`Index`] / [`DocType`] handles

#![forbid(unsafe_code)]

pub mod error;
pub mod name;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use name::{DocType, HasName, Index};
