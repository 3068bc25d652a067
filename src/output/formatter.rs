//! Output formatters for gateway responses
//!
//! Provides table and JSON output formats.

use serde_json::Value;
use zooz_client::NvpResponse;

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    JsonPretty,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            _ => None,
        }
    }
}

/// Response formatter
pub struct ResultFormatter {
    format: OutputFormat,
}

impl ResultFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Format a name/value-pair response
    pub fn format_nvp(&self, response: &NvpResponse) -> String {
        match self.format {
            OutputFormat::Table => {
                let rows: Vec<(String, String)> = response
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                format_table(&rows)
            }
            OutputFormat::Json => serde_json::to_string(response).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(response).unwrap_or_default(),
        }
    }

    /// Format a JSON document
    pub fn format_json(&self, value: &Value) -> String {
        match self.format {
            OutputFormat::Table => {
                let mut rows = Vec::new();
                flatten("", value, &mut rows);
                format_table(&rows)
            }
            OutputFormat::Json => serde_json::to_string(value).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(value).unwrap_or_default(),
        }
    }
}

fn format_table(rows: &[(String, String)]) -> String {
    let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    let mut output = String::new();
    for (key, value) in rows {
        output.push_str(&format!("{key:width$}  {value}\n"));
    }
    output
}

/// Flatten nested objects and arrays into dotted key paths
fn flatten(prefix: &str, value: &Value, rows: &mut Vec<(String, String)>) {
    let join = |key: &str| {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}.{key}")
        }
    };

    match value {
        Value::Object(map) => {
            for (key, value) in map {
                flatten(&join(key), value, rows);
            }
        }
        Value::Array(items) => {
            for (i, value) in items.iter().enumerate() {
                flatten(&join(&i.to_string()), value, rows);
            }
        }
        Value::String(s) => rows.push((prefix.to_string(), s.clone())),
        other => rows.push((prefix.to_string(), other.to_string())),
    }
}
