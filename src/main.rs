//! keystone-gateway entry point.
//!
//! # Usage
//!
//! ```bash
//! # Run the gateway
//! keystone-gateway
//! keystone-gateway serve
//!
//! # Validate configuration and probe Keystone
//! keystone-gateway check
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use keystone_gateway::config::{self, Config};
use keystone_gateway::domain::repositories::TokenRepository;
use keystone_gateway::infrastructure::keystone::KeystoneClient;
use keystone_gateway::server;
use tracing_subscriber::EnvFilter;

/// REST gateway over a Keystone identity service.
#[derive(Parser)]
#[command(name = "keystone-gateway")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,

    /// Validate configuration and check that Keystone answers
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;
    init_tracing(&config);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            config.print_summary();
            server::run(config).await
        }
        Command::Check => check(config).await,
    }
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn check(config: Config) -> Result<()> {
    config.print_summary();

    let client = KeystoneClient::new(config.keystone_settings())?;
    if client.health_check().await {
        tracing::info!("Identity service reachable");
        Ok(())
    } else {
        anyhow::bail!("Identity service at {} is not reachable", config.keystone_url)
    }
}
