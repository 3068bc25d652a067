//! Error types
//!
//! Separates local precondition failures, remote gateway rejections and
//! transport failures so callers can tell "could not reach ZooZ" apart from
//! "ZooZ rejected the request".

use std::fmt;
use thiserror::Error;

use crate::http::TransportError;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Error reported by the ZooZ service through a non-zero status
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayError {
    /// Error message returned by ZooZ
    pub message: String,
    /// Response status returned by ZooZ
    pub status_code: i64,
}

impl GatewayError {
    pub fn new(message: impl Into<String>, status_code: i64) -> Self {
        Self {
            message: message.into(),
            status_code,
        }
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (status {})", self.message, self.status_code)
    }
}

impl std::error::Error for GatewayError {}

/// Client errors
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was empty; nothing was sent
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response body did not have the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid retry policy: {0}")]
    InvalidRetryPolicy(String),

    #[error("Invalid header value for {0}")]
    InvalidHeader(&'static str),

    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}

impl Error {
    /// Status code reported by ZooZ, if this is a gateway rejection
    pub fn status_code(&self) -> Option<i64> {
        match self {
            Error::Gateway(e) => Some(e.status_code),
            _ => None,
        }
    }

    /// Check if the service was never reached
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Check if this is a remote rejection
    pub fn is_gateway(&self) -> bool {
        matches!(self, Error::Gateway(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_error_display() {
        let err = GatewayError::new("Invalid currency code", 102);
        assert_eq!(err.to_string(), "Invalid currency code (status 102)");
    }

    #[test]
    fn test_error_status_code() {
        let err: Error = GatewayError::new("denied", -3).into();
        assert!(err.is_gateway());
        assert_eq!(err.status_code(), Some(-3));

        let err = Error::MissingField("transaction_id");
        assert!(!err.is_gateway());
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_transport_error_kind() {
        let err: Error = TransportError::Connect {
            url: "https://app.zooz.com/mobile/SecuredWebServlet".to_string(),
            reason: "Connection refused".to_string(),
        }
        .into();
        assert!(err.is_transport());
        assert!(err.to_string().contains("Connection refused"));
    }
}
