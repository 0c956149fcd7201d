//! HTTP transport on `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use trawl_search::{Method, OptionMap, RawResponse, Transport};

use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Sends requests to a search service over HTTP.
///
/// The option map becomes the query string and the body is sent as JSON,
/// including on `GET`. Replies outside `2xx` are returned as
/// [`trawl_core::Error::Transport`] carrying the status.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    auth_token: Option<String>,
}

impl HttpTransport {
    /// Builds a transport from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let base_url = Url::parse(&config.url)
            .map_err(|e| Error::config(format!("invalid url '{}': {e}", config.url)))?;
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url,
            auth_token: config.auth_token.clone(),
        })
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for a request path.
    pub fn url_for(&self, path: &str) -> trawl_core::Result<Url> {
        let url = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&url)
            .map_err(|e| trawl_core::Error::transport(format!("invalid request url '{url}': {e}")))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        path: &str,
        method: Method,
        body: &Value,
        params: &OptionMap,
    ) -> trawl_core::Result<RawResponse> {
        let url = self.url_for(path)?;
        log::debug!("{method} {url}");

        let mut request = self
            .client
            .request(to_reqwest(method), url.clone())
            .query(&params.to_query_pairs());
        if !body.is_null() {
            request = request.json(body);
        }
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            trawl_core::Error::transport_with_source(format!("{method} {url} failed"), e)
        })?;
        let status = response.status();
        let text = response.text().await.map_err(|e| {
            trawl_core::Error::transport_with_source(
                format!("failed to read response from {url}"),
                e,
            )
        })?;

        let body: Value = if text.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str(&text) {
                Ok(body) => body,
                Err(_) if !status.is_success() => Value::String(text.clone()),
                Err(e) => return Err(e.into()),
            }
        };
        let raw = RawResponse::new(status.as_u16(), body);

        if !status.is_success() {
            let detail = raw.error_message().unwrap_or(text);
            log::warn!("{method} {url} returned {status}");
            return Err(trawl_core::Error::transport_status(
                status.as_u16(),
                format!("HTTP {status}: {detail}"),
            ));
        }
        Ok(raw)
    }

    fn name(&self) -> &str {
        "http"
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}
