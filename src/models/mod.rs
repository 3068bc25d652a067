//! Data models for the ZooZ API
//!
//! Credentials, environments and request payloads shared by the client.

mod credentials;
mod environment;
mod payload;

pub use credentials::Credentials;
pub use environment::{Endpoint, Environment, API_VERSION, PRODUCTION_URL, SANDBOX_URL};
pub use payload::{FieldValue, Payload};
