//! Courier Console - admin console for the last-mile delivery operation

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use courier_client::ClientConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment first: .env, then logging
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = cli::Cli::parse();

    let config = ClientConfig::from_env();
    tracing::debug!(
        base_url = %config.base_url,
        page_size = config.page_size,
        "client configured"
    );
    let api = config.build_api()?;

    commands::run(cli.command, &api, &config).await
}
