//! API credentials
//!
//! Which fields are needed depends on the API surface: the extended API uses
//! the developer id and server API key, the secured servlet uses the unique id
//! and app key. Nothing is validated locally; ZooZ rejects bad credentials.

use serde::{Deserialize, Serialize};
use std::fmt;

/// ZooZ credentials
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Developer email used to log in to the ZooZ developer portal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_id: Option<String>,

    /// Server API key (portal -> My Account)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// App unique id as registered in the developer portal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,

    /// App key received upon registration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_key: Option<String>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credentials for the extended server API
    pub fn extended(developer_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::new()
            .with_developer_id(developer_id)
            .with_api_key(api_key)
    }

    /// Credentials for the secured servlet
    pub fn secured(unique_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self::new().with_unique_id(unique_id).with_app_key(app_key)
    }

    pub fn with_developer_id(mut self, developer_id: impl Into<String>) -> Self {
        self.developer_id = Some(developer_id.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_unique_id(mut self, unique_id: impl Into<String>) -> Self {
        self.unique_id = Some(unique_id.into());
        self
    }

    pub fn with_app_key(mut self, app_key: impl Into<String>) -> Self {
        self.app_key = Some(app_key.into());
        self
    }

    /// Fill unset fields from another set of credentials
    pub fn or(self, fallback: Credentials) -> Self {
        Self {
            developer_id: self.developer_id.or(fallback.developer_id),
            api_key: self.api_key.or(fallback.api_key),
            unique_id: self.unique_id.or(fallback.unique_id),
            app_key: self.app_key.or(fallback.app_key),
        }
    }

    /// Copy with the keys masked, for display
    pub fn redacted(self) -> Self {
        let mask = |v: Option<String>| v.map(|_| "***".to_string());
        Self {
            api_key: mask(self.api_key),
            app_key: mask(self.app_key),
            ..self
        }
    }

    pub fn is_empty(&self) -> bool {
        self.developer_id.is_none()
            && self.api_key.is_none()
            && self.unique_id.is_none()
            && self.app_key.is_none()
    }
}

// Keys stay out of logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "***");
        f.debug_struct("Credentials")
            .field("developer_id", &self.developer_id)
            .field("api_key", &redact(&self.api_key))
            .field("unique_id", &self.unique_id)
            .field("app_key", &redact(&self.app_key))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_builders() {
        let creds = Credentials::extended("dev@example.com", "server-key");
        assert_eq!(creds.developer_id.as_deref(), Some("dev@example.com"));
        assert_eq!(creds.api_key.as_deref(), Some("server-key"));
        assert!(creds.unique_id.is_none());

        let creds = Credentials::secured("com.example.app", "app-key");
        assert_eq!(creds.unique_id.as_deref(), Some("com.example.app"));
        assert!(creds.developer_id.is_none());
        assert!(Credentials::new().is_empty());
    }

    #[test]
    fn test_credentials_or() {
        let merged = Credentials::new()
            .with_app_key("from-args")
            .or(Credentials::secured("from-file", "file-key"));

        assert_eq!(merged.unique_id.as_deref(), Some("from-file"));
        assert_eq!(merged.app_key.as_deref(), Some("from-args"));
    }

    #[test]
    fn test_debug_redacts_keys() {
        let creds = Credentials::secured("com.example.app", "super-secret");
        let debug = format!("{creds:?}");
        assert!(debug.contains("com.example.app"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_redacted() {
        let creds = Credentials::secured("com.example.app", "super-secret").redacted();
        assert_eq!(creds.unique_id.as_deref(), Some("com.example.app"));
        assert_eq!(creds.app_key.as_deref(), Some("***"));
        assert!(creds.api_key.is_none());
    }
}
