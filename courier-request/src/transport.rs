//! Pluggable transport layer.
//!
//! Implement [`Transport`] over any HTTP client to send prepared
//! [`RequestPayload`]s. Building a payload never needs a transport.

use std::convert::Infallible;

use crate::builder::RequestPayload;

/// Sends one prepared request and returns the raw response body.
///
/// Implementations own their connection handling, timeouts and retries.
pub trait Transport {
    /// The error type returned by [`Transport::send`].
    type Error: std::error::Error + Send + Sync + 'static;

    /// POST `payload` to the Bot API method `method` (e.g. `"sendPhoto"`).
    fn send(&mut self, method: &str, payload: &RequestPayload) -> Result<Vec<u8>, Self::Error>;
}

// ─── RecordingTransport ───────────────────────────────────────────────────────

/// In-memory transport that stores every request and answers with a fixed
/// response body.
#[derive(Clone, Debug)]
pub struct RecordingTransport {
    response: Vec<u8>,
    sent:     Vec<(String, RequestPayload)>,
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new(br#"{"ok":true,"result":true}"#.to_vec())
    }
}

impl RecordingTransport {
    /// Answer every request with `response`.
    pub fn new(response: impl Into<Vec<u8>>) -> Self {
        Self { response: response.into(), sent: Vec::new() }
    }

    /// Requests seen so far, oldest first.
    pub fn sent(&self) -> &[(String, RequestPayload)] {
        &self.sent
    }

    /// The most recent request.
    pub fn last(&self) -> Option<&(String, RequestPayload)> {
        self.sent.last()
    }
}

impl Transport for RecordingTransport {
    type Error = Infallible;

    fn send(&mut self, method: &str, payload: &RequestPayload) -> Result<Vec<u8>, Self::Error> {
        tracing::debug!("[courier] {method}: {} ({} bytes)", payload.content_type, payload.body.len());
        self.sent.push((method.to_owned(), payload.clone()));
        Ok(self.response.clone())
    }
}
