//! # Payout Gateway Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the outbound provider adapter
//! - Create the payout service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payout_hex::{PayoutService, inbound::HttpServer};
use payout_provider::HttpPayoutProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,payout_app=debug,payout_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting payout gateway on port {}", config.port);
    tracing::info!("Upstream provider: {}", config.api_base_url);

    // Build the outbound provider adapter
    let provider = HttpPayoutProvider::new(
        config.api_base_url.as_str(),
        config.api_key.as_str(),
        config.upstream_timeout,
    )?;

    // Create the payout service
    let service = PayoutService::new(provider);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
