//! Error types for trawl-core.
//!
//! Every misuse of the request builder is reported synchronously at the call
//! that caused it. Nothing here is deferred until a request is transmitted.

/// Errors raised while assembling or dispatching a search request.
///
/// Marked `#[non_exhaustive]` so new failure kinds can be added without
/// breaking downstream matches.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A value could not be used where a name, limit, flag, or query was expected.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the value
        message: String,
    },

    /// A request option outside the allow-list was used, or an unset option was read.
    #[error("Invalid option '{key}': {reason}")]
    InvalidOption {
        /// The offending option key
        key: String,
        /// Why the key was rejected
        reason: String,
    },

    /// Conversion from an arbitrary searchable source is not available.
    #[error("Unsupported conversion: {message}")]
    UnsupportedConversion {
        /// Which conversion was attempted
        message: String,
    },

    /// The transport failed to deliver the request or returned a failure status.
    #[error("Transport error: {message}")]
    Transport {
        /// Human-readable error message
        message: String,
        /// HTTP status, when the service answered
        status: Option<u16>,
        /// Underlying error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for trawl-core operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an [`Error::InvalidInput`].
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Error::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates an [`Error::InvalidOption`] for a key outside the allow-list.
    pub fn invalid_option<S: Into<String>>(key: S) -> Self {
        Error::InvalidOption {
            key: key.into(),
            reason: "not a recognized search option".to_string(),
        }
    }

    /// Creates an [`Error::InvalidOption`] for a valid key that was never set.
    pub fn option_not_set<S: Into<String>>(key: S) -> Self {
        Error::InvalidOption {
            key: key.into(),
            reason: "option does not exist".to_string(),
        }
    }

    /// Creates an [`Error::UnsupportedConversion`].
    pub fn unsupported_conversion<S: Into<String>>(message: S) -> Self {
        Error::UnsupportedConversion {
            message: message.into(),
        }
    }

    /// Creates a transport error with a message.
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Error::Transport {
            message: message.into(),
            status: None,
            source: None,
        }
    }

    /// Creates a transport error for a failure status returned by the service.
    pub fn transport_status<S: Into<String>>(status: u16, message: S) -> Self {
        Error::Transport {
            message: message.into(),
            status: Some(status),
            source: None,
        }
    }

    /// Creates a transport error with a message and source error.
    pub fn transport_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Transport {
            message: message.into(),
            status: None,
            source: Some(Box::new(source)),
        }
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns whether the caller caused this error.
    ///
    /// Client errors are permanent: retrying with the same input fails again.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::InvalidInput { .. }
            | Error::InvalidOption { .. }
            | Error::UnsupportedConversion { .. }
            | Error::Config { .. } => true,
            Error::Transport { status, .. } => matches!(status, Some(s) if (400..500).contains(s)),
            Error::Serialization(_) | Error::Io(_) => false,
        }
    }

    /// Returns the HTTP status attached to a transport error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport { status, .. } => *status,
            _ => None,
        }
    }
}
