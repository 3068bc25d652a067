//! ZooZ gateway client module
//!
//! Request construction, authentication and response parsing for the ZooZ
//! extended server API and secured servlet.

mod auth;
mod client;
mod response;

pub use auth::{
    APP_KEY_HEADER, DEVELOPER_ID_HEADER, RESPONSE_TYPE_HEADER, RESPONSE_TYPE_NVP,
    SERVER_API_KEY_HEADER, UNIQUE_ID_HEADER,
};
pub use client::GatewayClient;
pub use response::{check_nvp, parse_extended, parse_nvp, NvpResponse};
