//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

use super::ClientConfig;
use crate::models::Environment;

/// Environment variable prefix
const ENV_PREFIX: &str = "ZOOZ";

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Developer id from ZOOZ_DEVELOPER_ID
    pub developer_id: Option<String>,
    /// Server API key from ZOOZ_API_KEY
    pub api_key: Option<String>,
    /// App unique id from ZOOZ_UNIQUE_ID
    pub unique_id: Option<String>,
    /// App key from ZOOZ_APP_KEY
    pub app_key: Option<String>,
    /// Sandbox switch from ZOOZ_SANDBOX
    pub sandbox: Option<bool>,
    /// Timeout from ZOOZ_TIMEOUT
    pub timeout: Option<u64>,
    /// Base URL override from ZOOZ_BASE_URL
    pub base_url: Option<String>,
    /// Config file from ZOOZ_CONFIG
    pub config_file: Option<String>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            developer_id: get_env("DEVELOPER_ID"),
            api_key: get_env("API_KEY"),
            unique_id: get_env("UNIQUE_ID"),
            app_key: get_env("APP_KEY"),
            sandbox: get_env_bool("SANDBOX"),
            timeout: get_env_parse("TIMEOUT"),
            base_url: get_env("BASE_URL"),
            config_file: get_env("CONFIG"),
        }
    }

    /// Check if any environment variables are set
    pub fn has_any(&self) -> bool {
        self.developer_id.is_some()
            || self.api_key.is_some()
            || self.unique_id.is_some()
            || self.app_key.is_some()
            || self.sandbox.is_some()
            || self.timeout.is_some()
            || self.base_url.is_some()
            || self.config_file.is_some()
    }

    /// Override `config` with every variable that is set
    pub fn apply(&self, config: &mut ClientConfig) {
        let creds = &mut config.credentials;
        if let Some(v) = &self.developer_id {
            creds.developer_id = Some(v.clone());
        }
        if let Some(v) = &self.api_key {
            creds.api_key = Some(v.clone());
        }
        if let Some(v) = &self.unique_id {
            creds.unique_id = Some(v.clone());
        }
        if let Some(v) = &self.app_key {
            creds.app_key = Some(v.clone());
        }
        if let Some(sandbox) = self.sandbox {
            config.environment = Environment::from_sandbox(sandbox);
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(url) = &self.base_url {
            config.base_url = Some(url.clone());
        }
    }

    /// Print current environment configuration
    pub fn print_summary(&self) {
        let masked = |v: &Option<String>| v.as_ref().map(|_| "***");
        println!("Environment Configuration:");
        println!("  {}_DEVELOPER_ID: {:?}", ENV_PREFIX, self.developer_id);
        println!("  {}_API_KEY:      {:?}", ENV_PREFIX, masked(&self.api_key));
        println!("  {}_UNIQUE_ID:    {:?}", ENV_PREFIX, self.unique_id);
        println!("  {}_APP_KEY:      {:?}", ENV_PREFIX, masked(&self.app_key));
        println!("  {}_SANDBOX:      {:?}", ENV_PREFIX, self.sandbox);
        println!("  {}_TIMEOUT:      {:?}", ENV_PREFIX, self.timeout);
        println!("  {}_BASE_URL:     {:?}", ENV_PREFIX, self.base_url);
        println!("  {}_CONFIG:       {:?}", ENV_PREFIX, self.config_file);
    }
}

/// Get environment variable with prefix
fn get_env(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{name}")).ok()
}

/// Get environment variable and parse to type
fn get_env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    get_env(name).and_then(|v| v.parse().ok())
}

/// Get environment variable as boolean
fn get_env_bool(name: &str) -> Option<bool> {
    get_env(name).map(|v| {
        matches!(
            v.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on" | "enabled"
        )
    })
}

/// Builder for setting environment variables (useful for testing)
pub struct EnvBuilder {
    vars: Vec<(String, String)>,
}

impl EnvBuilder {
    /// Create a new environment builder
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    pub fn developer_id(mut self, id: impl Into<String>) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_DEVELOPER_ID"), id.into()));
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_API_KEY"), key.into()));
        self
    }

    pub fn unique_id(mut self, id: impl Into<String>) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_UNIQUE_ID"), id.into()));
        self
    }

    pub fn app_key(mut self, key: impl Into<String>) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_APP_KEY"), key.into()));
        self
    }

    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_SANDBOX"), sandbox.to_string()));
        self
    }

    pub fn timeout(mut self, timeout: u64) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_TIMEOUT"), timeout.to_string()));
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_BASE_URL"), url.into()));
        self
    }

    /// Apply environment variables
    pub fn apply(self) {
        for (key, value) in self.vars {
            env::set_var(key, value);
        }
    }

    /// Apply and return guard that restores on drop
    pub fn apply_scoped(self) -> EnvGuard {
        let previous: Vec<_> = self
            .vars
            .iter()
            .map(|(k, _)| (k.clone(), env::var(k).ok()))
            .collect();

        self.apply();

        EnvGuard { previous }
    }
}

impl Default for EnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard that restores environment variables on drop
pub struct EnvGuard {
    previous: Vec<(String, Option<String>)>,
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.previous {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }
}

/// Print all ZOOZ environment variables
pub fn print_env_help() {
    println!("Environment Variables:");
    println!();
    println!("  {ENV_PREFIX}_DEVELOPER_ID   Developer email (extended API)");
    println!("  {ENV_PREFIX}_API_KEY        Server API key (extended API)");
    println!("  {ENV_PREFIX}_UNIQUE_ID      App unique id (secured API)");
    println!("  {ENV_PREFIX}_APP_KEY        App key (secured API)");
    println!("  {ENV_PREFIX}_SANDBOX        Use the sandbox environment (true/false)");
    println!("  {ENV_PREFIX}_TIMEOUT        Request timeout in seconds");
    println!("  {ENV_PREFIX}_BASE_URL       Override the base URL");
    println!("  {ENV_PREFIX}_CONFIG         Path to configuration file");
    println!();
    println!("Example:");
    println!("  export {ENV_PREFIX}_UNIQUE_ID=com.example.app");
    println!("  export {ENV_PREFIX}_APP_KEY=...");
    println!("  zooz --sandbox open --amount 12 --currency GBP");
}
