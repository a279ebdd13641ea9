//! HTTP transport for the search endpoint.

use super::params::SearchParams;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Production search path used when no override is configured.
pub const DEFAULT_SEARCH_URL: &str = "http://acpx.virtuals.io/api/agents/v5/search";

/// Failed request. `message` carries whatever the transport or backend said.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportFailure {
    pub message: String,
}

impl TransportFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Message with the cause chain but without the request URL, which
    /// carries the user's query and must not feed quirk detection.
    fn from_reqwest(err: reqwest::Error) -> Self {
        let err = err.without_url();
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::new(message)
    }
}

/// Issues exactly one GET per call and hands back the decoded body.
///
/// A 2xx body that is not JSON comes back as `Value::Null`.
#[async_trait]
pub trait SearchTransport: Send + Sync {
    async fn get(&self, params: &SearchParams) -> Result<serde_json::Value, TransportFailure>;
}

/// reqwest-backed transport.
pub struct HttpSearchTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpSearchTransport {
    /// `timeout` of `None` leaves the request unbounded.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, TransportFailure> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("acp-search/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TransportFailure::new(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(url, client))
    }

    /// Use a preconfigured client (proxy, TLS, or timeout settings).
    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SearchTransport for HttpSearchTransport {
    async fn get(&self, params: &SearchParams) -> Result<serde_json::Value, TransportFailure> {
        debug!(url = %self.url, "sending search request");

        let response = self
            .client
            .get(&self.url)
            .query(params)
            .send()
            .await
            .map_err(TransportFailure::from_reqwest)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(TransportFailure::from_reqwest)?;

        // Error bodies are passed through whole, status regardless, so the
        // backend's SQL error reaches quirk detection. A body that echoes the
        // query text is classified on that text too.
        if !status.is_success() {
            return Err(TransportFailure::new(format!("HTTP {}: {}", status, body.trim())));
        }

        debug!(status = %status, bytes = body.len(), "search response received");
        Ok(serde_json::from_str(&body).unwrap_or(serde_json::Value::Null))
    }
}
