//! ZooZ gateway client
//!
//! Builds payloads and authentication headers for the extended server API
//! and the secured servlet, posts them through the retry policy and checks
//! the reported status.
//!
//! Requests go to production unless the client is switched to the sandbox:
//!
//! ```no_run
//! use zooz_client::{Credentials, Environment, GatewayClient};
//!
//! # async fn run() -> zooz_client::Result<()> {
//! let mut client = GatewayClient::new(Credentials::secured("com.example.app", "app-key"))?;
//! client.set_environment(Environment::Sandbox);
//!
//! let response = client.open_transaction(12, "GBP", None).await?;
//! println!("token: {}", response["token"]);
//! # Ok(())
//! # }
//! ```

use reqwest::header::HeaderMap;
use serde_json::Value;
use tracing::debug;

use super::auth::{extended_headers, secured_headers};
use super::response::{check_nvp, parse_extended, parse_nvp, NvpResponse};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpResponse, RetryPolicy};
use crate::models::{Credentials, Endpoint, Environment, FieldValue, Payload, API_VERSION};

const CMD_GET_TRANSACTION: &str = "getTransactionDetails";
const CMD_GET_TRANSACTIONS: &str = "getTransactionDetailsByPayerEmail";
const CMD_OPEN_TRANSACTION: &str = "openTrx";

/// Client for the ZooZ server APIs
#[derive(Clone, Debug)]
pub struct GatewayClient {
    credentials: Credentials,
    environment: Environment,
    base_url: Option<String>,
    retry: RetryPolicy,
    http: HttpClient,
}

impl GatewayClient {
    /// Create a production client with default timeout and retry policy
    pub fn new(credentials: Credentials) -> Result<Self> {
        Ok(Self {
            credentials,
            environment: Environment::default(),
            base_url: None,
            retry: RetryPolicy::default(),
            http: HttpClient::new()?,
        })
    }

    /// Create a client from configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut client = Self {
            credentials: config.credentials.clone(),
            environment: config.environment,
            base_url: None,
            retry: config.retry.policy()?,
            http: HttpClient::with_timeout(config.timeout_secs)?,
        };
        if let Some(url) = &config.base_url {
            client.set_base_url(url);
        }
        Ok(client)
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Send requests to `url` instead of the environment's base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.set_base_url(url);
        self
    }

    pub fn set_base_url(&mut self, url: impl Into<String>) {
        let mut url = url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = Some(url);
    }

    /// Switch environment for all subsequent requests
    pub fn set_environment(&mut self, environment: Environment) {
        self.environment = environment;
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Current base URL
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }

    /// URL of the secured servlet
    pub fn secured_url(&self) -> String {
        Endpoint::Secured.url(self.base_url())
    }

    /// URL of the extended server API
    pub fn extended_url(&self) -> String {
        Endpoint::Extended.url(self.base_url())
    }

    /// Authentication headers for the extended server API
    pub fn extended_headers(&self) -> Result<HeaderMap> {
        extended_headers(&self.credentials)
    }

    /// Authentication headers for the secured servlet
    pub fn secured_headers(&self) -> Result<HeaderMap> {
        secured_headers(&self.credentials)
    }

    /// POST to the secured servlet
    pub async fn post(&self, payload: &Payload, headers: HeaderMap) -> Result<HttpResponse> {
        self.post_to(Endpoint::Secured, payload, headers).await
    }

    /// POST to an endpoint, retrying connection failures
    ///
    /// The extended operations post to `Endpoint::Extended` (ExtendedServerAPI);
    /// `post` always targets the secured servlet.
    pub async fn post_to(
        &self,
        endpoint: Endpoint,
        payload: &Payload,
        headers: HeaderMap,
    ) -> Result<HttpResponse> {
        let url = endpoint.url(self.base_url());
        let response = self
            .retry
            .run(|| self.http.post_form(&url, payload, headers.clone()))
            .await?;
        Ok(response)
    }

    /// Get the details of a transaction by its id
    ///
    /// Returns the whole decoded document: `ResponseStatus` (0) and
    /// `ResponseObject` with the transaction info.
    pub async fn get_transaction(&self, transaction_id: &str) -> Result<Value> {
        if transaction_id.is_empty() {
            return Err(Error::MissingField("transaction_id"));
        }

        let payload = Payload::command(CMD_GET_TRANSACTION)
            .with("ver", API_VERSION)
            .with("transactionID", transaction_id);
        debug!("[ZOOZ] get transaction with payload: {:?}", payload);

        let headers = self.extended_headers()?;
        let response = self.post_to(Endpoint::Extended, &payload, headers).await?;
        parse_extended(response.text())
    }

    /// Get the transactions paid by a user
    ///
    /// Dates filter the result and are sent as given, expected `YYYY-MM-DD`.
    pub async fn get_transactions(
        &self,
        user_email: &str,
        from_date: Option<&str>,
        to_date: Option<&str>,
    ) -> Result<Value> {
        if user_email.is_empty() {
            return Err(Error::MissingField("user_email"));
        }

        let payload = Payload::command(CMD_GET_TRANSACTIONS)
            .with("ver", API_VERSION)
            .with("email", user_email)
            .with_opt("fromDate", from_date)
            .with_opt("toDate", to_date);
        debug!("[ZOOZ] get transactions for user: {:?}", payload);

        let headers = self.extended_headers()?;
        let response = self.post_to(Endpoint::Extended, &payload, headers).await?;
        parse_extended(response.text())
    }

    /// Open a transaction through the secured servlet
    ///
    /// `extra` carries optional fields from the mobile web developer guide
    /// and overrides fields of the same name. On success the response holds
    /// `statusCode` 0 and the transaction `token`.
    pub async fn open_transaction(
        &self,
        amount: impl Into<FieldValue>,
        currency_code: &str,
        extra: Option<Payload>,
    ) -> Result<NvpResponse> {
        let mut payload = Payload::command(CMD_OPEN_TRANSACTION)
            .with("amount", amount)
            .with("currencyCode", currency_code);
        if let Some(extra) = extra {
            payload.merge(extra);
        }
        debug!("[ZOOZ] open transaction: {:?}", payload);

        let headers = self.secured_headers()?;
        let response = self.post(&payload, headers).await?;
        check_nvp(parse_nvp(response.text()))
    }
}
