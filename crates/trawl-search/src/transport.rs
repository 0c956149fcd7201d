//! Transport abstraction.
//!
//! A [`Transport`] sends one request to the search service and returns its
//! decoded JSON reply. The HTTP implementation lives in `trawl-client`;
//! [`MockTransport`] records requests and replays canned responses for tests
//! and offline use.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use trawl_core::Result;

use crate::options::OptionMap;

/// HTTP verb of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// `GET`
    #[default]
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl Method {
    /// Upper-case verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded reply from the search service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// JSON body.
    pub body: Value,
}

impl RawResponse {
    /// Creates a response.
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// A `200 OK` response with the given body.
    pub fn ok(body: Value) -> Self {
        Self::new(200, body)
    }

    /// The JSON body.
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Returns `true` if the body carries an `error` entry.
    pub fn has_error(&self) -> bool {
        self.body.get("error").is_some_and(|e| !e.is_null())
    }

    /// Human-readable error, if the body carries one.
    ///
    /// Accepts both a plain string and an object with a `reason`.
    pub fn error_message(&self) -> Option<String> {
        let error = self.body.get("error")?;
        match error {
            Value::Null => None,
            Value::String(message) => Some(message.clone()),
            other => Some(
                other
                    .get("reason")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| other.to_string()),
            ),
        }
    }
}

/// Sends requests to the search service.
///
/// Implementations must be shareable across tasks; a [`Search`](crate::Search)
/// holds one behind an `Arc`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a request and returns the decoded reply.
    ///
    /// `path` is relative to the service root, `body` is the JSON request
    /// body, and `params` are rendered into the query string.
    async fn request(
        &self,
        path: &str,
        method: Method,
        body: &Value,
        params: &OptionMap,
    ) -> Result<RawResponse>;

    /// Transport name for diagnostics.
    fn name(&self) -> &str;
}

// ============================================================================
// MockTransport
// ============================================================================

/// A request captured by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// Request path.
    pub path: String,
    /// HTTP verb.
    pub method: Method,
    /// JSON body.
    pub body: Value,
    /// Transmitted options.
    pub params: OptionMap,
}

/// In-memory transport that records requests.
///
/// Replies come from a FIFO queue of canned results; once it is empty every
/// request gets an empty hits envelope.
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<VecDeque<Result<RawResponse>>>,
}

impl MockTransport {
    /// Creates a transport with no queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    pub fn push_response(&self, response: RawResponse) -> &Self {
        lock(&self.responses).push_back(Ok(response));
        self
    }

    /// Queues a `200 OK` response with the given body.
    pub fn push_body(&self, body: Value) -> &Self {
        self.push_response(RawResponse::ok(body))
    }

    /// Queues a failure.
    pub fn push_error(&self, error: trawl_core::Error) -> &Self {
        lock(&self.responses).push_back(Err(error));
        self
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        lock(&self.requests).last().cloned()
    }

    /// Number of requests received.
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Body returned when the queue is empty.
    pub fn empty_hits() -> Value {
        json!({
            "took": 0,
            "timed_out": false,
            "hits": {"total": 0, "max_score": null, "hits": []}
        })
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(
        &self,
        path: &str,
        method: Method,
        body: &Value,
        params: &OptionMap,
    ) -> Result<RawResponse> {
        log::trace!("mock {method} {path}");
        lock(&self.requests).push(RecordedRequest {
            path: path.to_string(),
            method,
            body: body.clone(),
            params: params.clone(),
        });
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| Ok(RawResponse::ok(Self::empty_hits())))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

impl fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockTransport")
            .field("requests", &lock(&self.requests).len())
            .field("queued", &lock(&self.responses).len())
            .finish()
    }
}

// A panic while holding the lock cannot leave the vectors half-written.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
