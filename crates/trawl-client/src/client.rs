//! Trawl client facade.

use std::sync::Arc;

use trawl_core::Index;
use trawl_search::{Search, Transport};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpTransport;

/// Entry point for talking to one search service.
///
/// Holds a shared transport; every [`search`](Self::search) call returns a
/// fresh builder bound to it.
#[derive(Clone)]
pub struct Client {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Creates a client with an HTTP transport built from `config`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(&config)?);
        log::debug!("client ready for {}", config.url);
        Ok(Self { config, transport })
    }

    /// Creates a client for `url` with default settings.
    pub fn from_url(url: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::with_url(url))
    }

    /// Creates a client that sends through an existing transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// The configuration the client was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The shared transport.
    pub fn transport(&self) -> Arc<dyn Transport> {
        Arc::clone(&self.transport)
    }

    /// A new, empty search builder.
    pub fn search(&self) -> Search {
        Search::new(self.transport())
    }

    /// A handle for the named index.
    pub fn index(&self, name: impl Into<String>) -> Index {
        Index::new(name)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("url", &self.config.url)
            .field("transport", &self.transport.name())
            .finish()
    }
}
