//! Request payloads
//!
//! A payload is a flat map of field names to primitive values, sent as an
//! `application/x-www-form-urlencoded` body.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Primitive form field value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(v) => write!(f, "{v}"),
            FieldValue::Decimal(v) => write!(f, "{v}"),
            FieldValue::Text(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Integer(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Integer(v.into())
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        FieldValue::Integer(v.into())
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Decimal(v)
    }
}

/// Form payload
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(BTreeMap<String, FieldValue>);

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a payload for a ZooZ command
    pub fn command(cmd: &str) -> Self {
        Self::new().with("cmd", cmd)
    }

    /// Add a field
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a field only when a value is present
    pub fn with_opt<V: Into<FieldValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Merge another payload, its fields win on name collisions
    pub fn merge(&mut self, other: Payload) {
        self.0.extend(other.0);
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Payload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_builder() {
        let payload = Payload::command("openTrx")
            .with("amount", 12)
            .with("currencyCode", "GBP");

        assert_eq!(payload.len(), 3);
        assert_eq!(payload.get("cmd"), Some(&FieldValue::from("openTrx")));
        assert_eq!(payload.get("amount"), Some(&FieldValue::Integer(12)));
    }

    #[test]
    fn test_payload_with_opt_skips_none() {
        let payload = Payload::command("getTransactionDetailsByPayerEmail")
            .with_opt("fromDate", Some("2013-01-01"))
            .with_opt::<&str>("toDate", None);

        assert!(payload.get("fromDate").is_some());
        assert!(payload.get("toDate").is_none());
    }

    #[test]
    fn test_payload_merge_last_write_wins() {
        let mut payload = Payload::command("openTrx").with("amount", 12);
        let extra: Payload = [("amount", "15"), ("invoice.number", "A-1")]
            .into_iter()
            .collect();
        payload.merge(extra);

        assert_eq!(payload.get("amount"), Some(&FieldValue::from("15")));
        assert_eq!(payload.get("invoice.number"), Some(&FieldValue::from("A-1")));
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::from(12).to_string(), "12");
        assert_eq!(FieldValue::from(9.5).to_string(), "9.5");
        assert_eq!(FieldValue::from("GBP").to_string(), "GBP");
    }
}
