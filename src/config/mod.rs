//! Configuration module
//!
//! Client settings, loaded from configuration files and overridden by
//! `ZOOZ_*` environment variables.

mod env;
mod file;

pub use env::{print_env_help, EnvBuilder, EnvConfig, EnvGuard};
pub use file::ConfigFile;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http::{
    RetryPolicy, DEFAULT_BACKOFF, DEFAULT_DELAY_SECS, DEFAULT_RETRIES, DEFAULT_TIMEOUT_SECS,
};
use crate::models::{Credentials, Environment};

/// Client configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Sandbox or production
    #[serde(default)]
    pub environment: Environment,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Retry settings for connection failures
    #[serde(default)]
    pub retry: RetrySettings,

    /// Base URL override, takes precedence over the environment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default)]
    pub credentials: Credentials,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            retry: RetrySettings::default(),
            base_url: None,
            credentials: Credentials::default(),
        }
    }
}

impl ClientConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            ..Self::default()
        }
    }

    pub fn sandbox(mut self) -> Self {
        self.environment = Environment::Sandbox;
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Check settings that would otherwise fail when building a client
    pub fn validate(&self) -> Result<()> {
        self.retry.policy()?;
        Ok(())
    }
}

/// Raw retry settings, validated by [`RetrySettings::policy`]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RetrySettings {
    /// Number of retries after the first attempt
    pub retries: i64,
    /// Base delay in seconds
    pub delay_secs: f64,
    /// Factor applied to the delay, must be greater than 1
    pub backoff: f64,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            retries: DEFAULT_RETRIES,
            delay_secs: DEFAULT_DELAY_SECS,
            backoff: DEFAULT_BACKOFF,
        }
    }
}

impl RetrySettings {
    pub fn policy(&self) -> Result<RetryPolicy> {
        RetryPolicy::new(self.retries, self.delay_secs, self.backoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.retry.retries, 5);
        assert!(config.credentials.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builders() {
        let config = ClientConfig::new(Credentials::secured("app", "key"))
            .sandbox()
            .with_timeout(10);

        assert!(config.environment.is_sandbox());
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.credentials.unique_id.as_deref(), Some("app"));
    }

    #[test]
    fn test_retry_settings_validation() {
        let settings = RetrySettings {
            retries: -1,
            ..RetrySettings::default()
        };
        assert!(settings.policy().is_err());

        let config = ClientConfig {
            retry: RetrySettings {
                delay_secs: 0.0,
                ..RetrySettings::default()
            },
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: ClientConfig = serde_yaml::from_str("environment: sandbox\n").unwrap();
        assert!(config.environment.is_sandbox());
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.retry, RetrySettings::default());
    }
}
