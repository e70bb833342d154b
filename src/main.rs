//! Binfinder - compost bin directory and lookup service.
//!
//! Serves a small, static set of compost drop-off bins over a read-only
//! HTTP API: list every bin, or find the one nearest to a coordinate
//! with distance and compass bearing.

mod cli;
mod config;
mod dataset;
mod geo;
mod models;
mod server;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    // Initialize logging based on verbosity
    let default_filter = if cli::is_verbose() {
        "binfinder=info"
    } else {
        "binfinder=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Run CLI
    cli::run().await
}
