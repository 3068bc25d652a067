//! HTTP transport for the ZooZ API
//!
//! Thin wrapper over a pooled `reqwest::Client` that posts form payloads and
//! classifies failures so the retry policy can tell connection errors apart.

use reqwest::{header::HeaderMap, Client};
use std::error::Error as StdError;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::Payload;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Transport errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The connection could not be established; safe to retry
    #[error("Connection failed to {url}: {reason}")]
    Connect { url: String, reason: String },

    #[error("Timeout after {secs} seconds: {reason}")]
    Timeout { secs: u64, reason: String },

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to read response body: {0}")]
    Body(String),
}

impl TransportError {
    /// Check if this is a connection-level failure
    pub fn is_connect(&self) -> bool {
        matches!(self, TransportError::Connect { .. })
    }
}

/// Render an error with all of its causes, outermost first
///
/// reqwest's own message only names the request; the DNS, TCP or TLS
/// failure lives further down the source chain.
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut chain = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !chain.contains(&text) {
            chain.push_str(": ");
            chain.push_str(&text);
        }
        source = cause.source();
    }
    chain
}

/// Pooled HTTP client
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    timeout_secs: u64,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Create client with custom timeout
    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("zooz-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Client(e.to_string()))?;

        Ok(Self {
            client,
            timeout_secs,
        })
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// POST a form-encoded payload
    ///
    /// The response is returned whatever its HTTP status; ZooZ reports
    /// failures in the body.
    pub async fn post_form(
        &self,
        url: &str,
        payload: &Payload,
        headers: HeaderMap,
    ) -> std::result::Result<HttpResponse, TransportError> {
        debug!("Sending POST request to {}", url);

        let start = Instant::now();

        let response = self
            .client
            .post(url)
            .headers(headers)
            .form(payload)
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(error_chain(&e)))?;

        let duration_ms = start.elapsed().as_millis() as u64;

        debug!(
            "Response: {} {} in {}ms",
            status.as_u16(),
            status.canonical_reason().unwrap_or(""),
            duration_ms
        );

        Ok(HttpResponse {
            status_code: status.as_u16(),
            body,
            duration_ms,
        })
    }

    // Connect timeouts count as connection failures
    fn classify(&self, url: &str, e: reqwest::Error) -> TransportError {
        let reason = error_chain(&e);
        if e.is_connect() {
            TransportError::Connect {
                url: url.to_string(),
                reason,
            }
        } else if e.is_timeout() {
            TransportError::Timeout {
                secs: self.timeout_secs,
                reason,
            }
        } else {
            TransportError::RequestFailed(reason)
        }
    }
}

/// HTTP response
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: String,
    pub duration_ms: u64,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    pub fn text(&self) -> &str {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_client_timeout() {
        let client = HttpClient::with_timeout(5).unwrap();
        assert_eq!(client.timeout_secs(), 5);
        assert_eq!(HttpClient::new().unwrap().timeout_secs(), DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_http_response() {
        let resp = HttpResponse {
            status_code: 200,
            body: "statusCode=0&token=abc".to_string(),
            duration_ms: 100,
        };

        assert!(resp.is_success());
        assert_eq!(resp.text(), "statusCode=0&token=abc");
    }

    #[test]
    fn test_transport_error_is_connect() {
        let connect = TransportError::Connect {
            url: "https://app.zooz.com/".to_string(),
            reason: "dns error".to_string(),
        };
        let timeout = TransportError::Timeout {
            secs: 30,
            reason: "operation timed out".to_string(),
        };

        assert!(connect.is_connect());
        assert!(!timeout.is_connect());
        assert!(!TransportError::RequestFailed("boom".to_string()).is_connect());
        assert_eq!(
            connect.to_string(),
            "Connection failed to https://app.zooz.com/: dns error"
        );
    }

    #[derive(Debug)]
    struct Layer(&'static str, Option<Box<Layer>>);

    impl std::fmt::Display for Layer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl StdError for Layer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.1.as_deref().map(|e| e as &(dyn StdError + 'static))
        }
    }

    #[test]
    fn test_error_chain_includes_causes() {
        let err = Layer(
            "error sending request",
            Some(Box::new(Layer(
                "client error (Connect)",
                Some(Box::new(Layer("failed to lookup address information", None))),
            ))),
        );

        assert_eq!(
            error_chain(&err),
            "error sending request: client error (Connect): failed to lookup address information"
        );
    }

    #[test]
    fn test_error_chain_skips_repeated_text() {
        let err = Layer(
            "tcp connect error: Connection refused",
            Some(Box::new(Layer("Connection refused", None))),
        );

        assert_eq!(error_chain(&err), "tcp connect error: Connection refused");
    }

    #[tokio::test]
    async fn test_post_form_connection_refused() {
        let client = HttpClient::with_timeout(5).unwrap();
        let err = client
            .post_form("http://127.0.0.1:1/", &Payload::command("openTrx"), HeaderMap::new())
            .await
            .unwrap_err();

        assert!(err.is_connect());
        match err {
            TransportError::Connect { url, reason } => {
                assert_eq!(url, "http://127.0.0.1:1/");
                assert!(reason.to_lowercase().contains("refused"), "reason: {reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_post_form_unresolvable_host_keeps_cause() {
        let client = HttpClient::with_timeout(5).unwrap();
        let url = "http://no-such-host.invalid/";
        let err = client
            .post_form(url, &Payload::command("openTrx"), HeaderMap::new())
            .await
            .unwrap_err();

        assert!(err.is_connect());
        let message = err.to_string().to_lowercase();
        assert!(
            message.contains("dns") || message.contains("lookup"),
            "cause missing: {message}"
        );
    }
}
