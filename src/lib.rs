//! ZooZ payment gateway client
//!
//! Wraps the ZooZ server APIs: method calls become authenticated form POSTs
//! and the responses come back as decoded documents or typed errors.
//!
//! ## Features
//!
//! - Extended server API: transaction details by id or by payer email (JSON)
//! - Secured servlet: open transactions (name/value-pair responses)
//! - Sandbox and production environments, switchable per client
//! - Retry with linear backoff on connection failures
//! - Configuration from YAML/JSON files and `ZOOZ_*` environment variables
//!
//! ## Usage
//!
//! ```no_run
//! use zooz_client::{Credentials, Environment, GatewayClient};
//!
//! # async fn run() -> zooz_client::Result<()> {
//! let client = GatewayClient::new(Credentials::extended("dev@example.com", "server-key"))?
//!     .with_environment(Environment::Sandbox);
//!
//! let details = client.get_transaction("T-123").await?;
//! println!("{}", details["ResponseObject"]);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod models;
pub mod utils;

pub use config::{ClientConfig, ConfigFile, EnvConfig, RetrySettings};
pub use error::{Error, GatewayError, Result};
pub use gateway::{GatewayClient, NvpResponse};
pub use http::{RetryPolicy, TransportError};
pub use models::{Credentials, Endpoint, Environment, FieldValue, Payload};
