//! Authentication headers
//!
//! Missing credentials leave their header out; ZooZ answers with an error
//! status which surfaces as a gateway error.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::{Error, Result};
use crate::models::Credentials;

pub const DEVELOPER_ID_HEADER: &str = "ZooZDeveloperId";
pub const SERVER_API_KEY_HEADER: &str = "ZooZServerAPIKey";
pub const UNIQUE_ID_HEADER: &str = "ZooZUniqueID";
pub const APP_KEY_HEADER: &str = "ZooZAppKey";
pub const RESPONSE_TYPE_HEADER: &str = "ZooZResponseType";

/// Name/value-pair response format requested from the secured servlet
pub const RESPONSE_TYPE_NVP: &str = "NVP";

/// Headers for the extended server API
pub fn extended_headers(credentials: &Credentials) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    insert(&mut headers, DEVELOPER_ID_HEADER, credentials.developer_id.as_deref())?;
    insert(&mut headers, SERVER_API_KEY_HEADER, credentials.api_key.as_deref())?;
    Ok(headers)
}

/// Headers for the secured servlet
pub fn secured_headers(credentials: &Credentials) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    insert(&mut headers, UNIQUE_ID_HEADER, credentials.unique_id.as_deref())?;
    insert(&mut headers, APP_KEY_HEADER, credentials.app_key.as_deref())?;
    insert(&mut headers, RESPONSE_TYPE_HEADER, Some(RESPONSE_TYPE_NVP))?;
    Ok(headers)
}

fn insert(headers: &mut HeaderMap, name: &'static str, value: Option<&str>) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };

    let header_name =
        HeaderName::from_bytes(name.as_bytes()).map_err(|_| Error::InvalidHeader(name))?;
    let mut header_value = HeaderValue::from_str(value).map_err(|_| Error::InvalidHeader(name))?;
    if name != RESPONSE_TYPE_HEADER {
        header_value.set_sensitive(true);
    }

    headers.insert(header_name, header_value);
    Ok(())
}
