//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use zooz_client::FieldValue;

/// Command-line client for the ZooZ payment gateway
#[derive(Parser, Debug)]
#[command(name = "zooz")]
#[command(version)]
#[command(about = "Open and query ZooZ transactions")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use the sandbox environment
    #[arg(long, global = true)]
    pub sandbox: bool,

    /// Configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json, json-pretty)
    #[arg(short, long, global = true, default_value = "table")]
    pub format: String,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open a transaction through the secured servlet
    Open(OpenArgs),

    /// Get the details of a transaction
    Transaction(TransactionArgs),

    /// List transactions paid by a user
    Transactions(TransactionsArgs),

    /// Show the endpoints in use
    Urls,

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for open command
#[derive(Parser, Debug)]
pub struct OpenArgs {
    /// Amount to pay
    #[arg(short, long)]
    pub amount: String,

    /// ISO currency code
    #[arg(short = 'C', long)]
    pub currency: String,

    /// Extra field as key=value (repeatable)
    #[arg(short, long = "extra", value_parser = parse_key_val)]
    pub extra: Vec<(String, String)>,
}

impl OpenArgs {
    /// Amount as a form value, numeric when it parses as a number
    pub fn amount_value(&self) -> FieldValue {
        if let Ok(v) = self.amount.parse::<i64>() {
            FieldValue::Integer(v)
        } else if let Ok(v) = self.amount.parse::<f64>() {
            FieldValue::Decimal(v)
        } else {
            FieldValue::Text(self.amount.clone())
        }
    }
}

/// Arguments for transaction command
#[derive(Parser, Debug)]
pub struct TransactionArgs {
    /// Transaction id
    pub id: String,
}

/// Arguments for transactions command
#[derive(Parser, Debug)]
pub struct TransactionsArgs {
    /// Payer email
    pub email: String,

    /// Only transactions from this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Only transactions up to this date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

/// Arguments for config management
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write an example configuration file
    Init {
        /// Output path (defaults to ~/.config/zooz/config.yaml)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration
    Show,

    /// Show supported environment variables
    Env,
}

/// Parse a key=value pair
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid key=value: no '=' found in '{s}'"))?;
    if key.is_empty() {
        return Err(format!("invalid key=value: empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Format a date the way ZooZ expects it
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
