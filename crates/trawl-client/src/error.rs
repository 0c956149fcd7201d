//! Error types for trawl-client

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for trawl-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trawl-client
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from trawl-core (builder misuse or transport failure)
    #[error(transparent)]
    Core(#[from] trawl_core::Error),

    /// HTTP client construction error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration file could not be parsed
    #[error("Failed to parse {path}: {source}")]
    ConfigParse {
        /// File being parsed
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// Configuration could not be rendered as TOML
    #[error("Failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Configuration value is unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error on a configuration file
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Creates an [`Error::Config`].
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    /// Wraps an I/O error with the path it happened on.
    pub fn io_with_path(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
