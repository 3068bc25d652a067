//! Response parsing
//!
//! The extended API answers with JSON, the secured servlet with URL-encoded
//! name/value pairs. Both report a numeric status where zero means success.

use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::{Error, GatewayError, Result};

/// Flat name/value-pair response
pub type NvpResponse = BTreeMap<String, String>;

/// Decode a name/value-pair body
///
/// Blank values are kept and the first value wins when a key repeats.
pub fn parse_nvp(body: &str) -> NvpResponse {
    let mut response = NvpResponse::new();
    for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
        response
            .entry(key.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    response
}

/// Check the `statusCode` of a secured servlet response
pub fn check_nvp(response: NvpResponse) -> Result<NvpResponse> {
    let raw = response
        .get("statusCode")
        .ok_or_else(|| Error::Decode("missing statusCode".to_string()))?;
    let status = parse_status_str(raw)
        .ok_or_else(|| Error::Decode(format!("invalid statusCode: {raw:?}")))?;

    if status != 0 {
        let message = response.get("errorMessage").cloned().unwrap_or_default();
        return Err(GatewayError::new(message, status).into());
    }

    Ok(response)
}

/// Decode and check an extended API response
pub fn parse_extended(body: &str) -> Result<Value> {
    let response: Value =
        serde_json::from_str(body).map_err(|e| Error::Decode(format!("invalid JSON: {e}")))?;

    let raw = response
        .get("ResponseStatus")
        .ok_or_else(|| Error::Decode("missing ResponseStatus".to_string()))?;
    let status = parse_status(raw)
        .ok_or_else(|| Error::Decode(format!("invalid ResponseStatus: {raw}")))?;

    if status != 0 {
        let message = response
            .get("ResponseObject")
            .and_then(|o| o.get("errorMessage"))
            .and_then(Value::as_str)
            .ok_or_else(|| Error::Decode("missing ResponseObject.errorMessage".to_string()))?;
        return Err(GatewayError::new(message, status).into());
    }

    Ok(response)
}

/// Read a status sent either as a number or a numeric string
fn parse_status(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => parse_status_str(s),
        _ => None,
    }
}

fn parse_status_str(s: &str) -> Option<i64> {
    s.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_nvp_keeps_blank_and_first_value() {
        let parsed = parse_nvp("a=1&b=&c=3&c=9");

        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed["a"], "1");
        assert_eq!(parsed["b"], "");
        assert_eq!(parsed["c"], "3");
    }

    #[test]
    fn test_parse_nvp_decodes() {
        let parsed = parse_nvp("errorMessage=Invalid+amount%3A+abc&flag");

        assert_eq!(parsed["errorMessage"], "Invalid amount: abc");
        assert_eq!(parsed["flag"], "");
        assert!(parse_nvp("").is_empty());
    }

    #[test]
    fn test_check_nvp_success() {
        let response = check_nvp(parse_nvp("statusCode=0&token=ABC123")).unwrap();
        assert_eq!(response["token"], "ABC123");
    }

    #[test]
    fn test_check_nvp_error() {
        let err = check_nvp(parse_nvp("statusCode=-1&errorMessage=Invalid+currency")).unwrap_err();
        match err {
            Error::Gateway(e) => {
                assert_eq!(e.message, "Invalid currency");
                assert_eq!(e.status_code, -1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_check_nvp_malformed() {
        assert!(matches!(check_nvp(parse_nvp("token=abc")), Err(Error::Decode(_))));
        assert!(matches!(
            check_nvp(parse_nvp("statusCode=oops")),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn test_parse_extended_success() {
        let body = json!({
            "ResponseStatus": 0,
            "ResponseObject": {"transactionID": "T-1", "amount": 12}
        })
        .to_string();

        let response = parse_extended(&body).unwrap();
        assert_eq!(response["ResponseObject"]["transactionID"], "T-1");
    }

    #[test]
    fn test_parse_extended_error_status() {
        let body = json!({
            "ResponseStatus": "4",
            "ResponseObject": {"errorMessage": "Transaction not found"}
        })
        .to_string();

        let err = parse_extended(&body).unwrap_err();
        assert_eq!(err.status_code(), Some(4));
        assert!(err.to_string().contains("Transaction not found"));
    }

    #[test]
    fn test_parse_extended_malformed() {
        assert!(matches!(parse_extended("<html>"), Err(Error::Decode(_))));
        assert!(matches!(parse_extended("{}"), Err(Error::Decode(_))));
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status(&json!(0)), Some(0));
        assert_eq!(parse_status(&json!(" 12 ")), Some(12));
        assert_eq!(parse_status(&json!(3.0)), Some(3));
        assert_eq!(parse_status(&json!(null)), None);
    }
}
