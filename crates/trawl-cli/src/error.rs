//! Error types for trawl-cli

use thiserror::Error;

/// Result type alias for trawl-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trawl-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from trawl-core
    #[error(transparent)]
    Core(#[from] trawl_core::Error),

    /// Error from trawl-client
    #[error(transparent)]
    Client(#[from] trawl_client::Error),

    /// A command-line value could not be used
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Output could not be rendered
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates an [`Error::InvalidArgument`].
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Error::InvalidArgument(message.into())
    }
}
