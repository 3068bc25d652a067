//! ZooZ environments and endpoints
//!
//! Maps the sandbox/production selection to base URLs and the two endpoint
//! groups exposed under each base URL.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Production base URL
pub const PRODUCTION_URL: &str = "https://app.zooz.com/";

/// Sandbox base URL
pub const SANDBOX_URL: &str = "https://sandbox.zooz.co/";

/// API version sent with every extended API request
pub const API_VERSION: &str = "1.0.4";

/// ZooZ environment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Real transactions and payments
    #[default]
    Production,
    /// Testing without real money movement
    Sandbox,
}

impl Environment {
    /// Get base URL, always ending with '/'
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_URL,
            Environment::Sandbox => SANDBOX_URL,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Sandbox => "sandbox",
        }
    }

    pub fn is_sandbox(&self) -> bool {
        matches!(self, Environment::Sandbox)
    }

    /// Select environment from a sandbox flag
    pub fn from_sandbox(sandbox: bool) -> Self {
        if sandbox {
            Environment::Sandbox
        } else {
            Environment::Production
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Environment> {
        match s.to_lowercase().as_str() {
            "production" | "prod" | "live" => Some(Environment::Production),
            "sandbox" | "test" => Some(Environment::Sandbox),
            _ => None,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Endpoint groups under a base URL
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Secured servlet, used to open transactions (NVP responses)
    Secured,
    /// Extended server API, used to query transactions (JSON responses)
    Extended,
}

impl Endpoint {
    /// Path relative to the base URL
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Secured => "mobile/SecuredWebServlet",
            Endpoint::Extended => "mobile/ExtendedServerAPI",
        }
    }

    /// Join with a base URL
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.path())
    }
}
