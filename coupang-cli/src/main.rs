//! Coupang Open API command-line client
//!
//! Signs and sends one vendor request per invocation and prints the JSON
//! response on stdout. Logs go to stderr.

mod commands;
mod config;

use clap::Parser;
use commands::Command;
use config::ConfigLoader;
use coupang_sdk::client::CoupangClient;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Coupang Open API client
#[derive(Parser, Debug)]
#[command(name = "coupang")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file [default: ./coupang.toml if present]
    #[arg(short, long, env = "COUPANG_CONFIG")]
    config: Option<PathBuf>,

    /// Skip TLS certificate verification (insecure)
    #[arg(long, default_value = "false")]
    insecure: bool,

    /// Exit non-zero and print the cause when both attempts fail
    #[arg(long, default_value = "false")]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let args = Args::parse();

    // Credentials are validated here, before any request is built.
    let loaded = ConfigLoader::new(args.config.as_deref(), args.insecure)
        .load()
        .map_err(|e| {
            tracing::error!("Failed to load configuration: {}", e);
            e
        })?;

    let client = CoupangClient::new(&loaded.credentials, loaded.client)?;
    let request = args.command.into_request(client.vendor_id())?;
    tracing::debug!(
        method = %request.method(),
        path = request.path(),
        "dispatching"
    );

    let response = if args.strict {
        Some(client.send(&request).await?)
    } else {
        client.call(&request).await?
    };

    match response {
        Some(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("null");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Initialize the tracing subscriber with environment-based filtering.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
