//! zooz - command-line client for the ZooZ payment gateway
//!
//! ## Usage
//!
//! ```bash
//! # Open a transaction in the sandbox
//! ZOOZ_UNIQUE_ID=com.example.app ZOOZ_APP_KEY=... zooz --sandbox open --amount 12 -C GBP
//!
//! # Transaction details
//! zooz transaction T-123 --format json-pretty
//!
//! # Transactions paid by a user in January
//! zooz transactions payer@example.com --from 2013-01-01 --to 2013-01-31
//!
//! # Configuration
//! zooz config init
//! zooz config show
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

mod cli;
mod output;

use cli::{Args, Command, ConfigAction};
use output::{OutputFormat, ResultFormatter};
use zooz_client::config::print_env_help;
use zooz_client::utils::{init_logger, LogLevel};
use zooz_client::{ClientConfig, ConfigFile, EnvConfig, Environment, GatewayClient, Payload};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logger(if args.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    });

    let formatter = ResultFormatter::new(
        OutputFormat::from_str(&args.format)
            .ok_or_else(|| anyhow::anyhow!("Unknown output format: {}", args.format))?,
    );

    match &args.command {
        Command::Open(open_args) => {
            let client = build_client(&args)?;
            let extra: Payload = open_args.extra.iter().cloned().collect();
            let extra = (!extra.is_empty()).then_some(extra);

            info!(
                "Opening transaction for {} {} ({})",
                open_args.amount,
                open_args.currency,
                client.environment()
            );
            let response = client
                .open_transaction(open_args.amount_value(), &open_args.currency, extra)
                .await
                .context("Failed to open transaction")?;
            print!("{}", formatter.format_nvp(&response));
        }
        Command::Transaction(tx_args) => {
            let client = build_client(&args)?;
            let response = client
                .get_transaction(&tx_args.id)
                .await
                .with_context(|| format!("Failed to get transaction {}", tx_args.id))?;
            println!("{}", formatter.format_json(&response));
        }
        Command::Transactions(txs_args) => {
            let client = build_client(&args)?;
            let from = txs_args.from.map(cli::format_date);
            let to = txs_args.to.map(cli::format_date);
            let response = client
                .get_transactions(&txs_args.email, from.as_deref(), to.as_deref())
                .await
                .with_context(|| format!("Failed to get transactions for {}", txs_args.email))?;
            println!("{}", formatter.format_json(&response));
        }
        Command::Urls => {
            let client = build_client(&args)?;
            println!("Environment:  {}", client.environment());
            println!("Secured API:  {}", client.secured_url());
            println!("Extended API: {}", client.extended_url());
        }
        Command::Config(config_args) => manage_config(&config_args.action, &args)?,
    }

    Ok(())
}

/// Resolve configuration: file, then environment variables, then flags
fn load_config(args: &Args) -> Result<ClientConfig> {
    let env = EnvConfig::load();

    let path = args
        .config
        .clone()
        .or_else(|| env.config_file.as_ref().map(PathBuf::from));
    let file = match path {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::load_default()?,
    };

    let mut config = file.client;
    env.apply(&mut config);

    if args.sandbox {
        config.environment = Environment::Sandbox;
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }

    Ok(config)
}

fn build_client(args: &Args) -> Result<GatewayClient> {
    let config = load_config(args)?;
    GatewayClient::from_config(&config).context("Failed to create ZooZ client")
}

fn manage_config(action: &ConfigAction, args: &Args) -> Result<()> {
    match action {
        ConfigAction::Init { output, force } => {
            let path = output.clone().unwrap_or_else(ConfigFile::default_path);
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists: {} (use --force to overwrite)",
                    path.display()
                );
            }
            ConfigFile::example().save(&path)?;
            println!("✓ Wrote example configuration to {}", path.display());
        }
        ConfigAction::Show => {
            let mut config = load_config(args)?;
            config.credentials = config.credentials.clone().redacted();
            let file = ConfigFile {
                client: config,
                ..ConfigFile::default()
            };
            print!("{}", serde_yaml::to_string(&file).context("Failed to serialize config")?);
        }
        ConfigAction::Env => {
            print_env_help();
            println!();
            EnvConfig::load().print_summary();
        }
    }

    Ok(())
}
