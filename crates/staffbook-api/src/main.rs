//! `staffbook-server`: the Staffbook REST API.

use anyhow::Context;
use clap::Parser;
use staffbook_api::{Server, ServerConfig};
use staffbook_storage::open_store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; explicit environment wins either way.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,staffbook=debug".into()),
        )
        .init();

    let config = ServerConfig::parse();
    tracing::info!(store = %config.store, "opening employee store");
    let store = open_store(&config.store)
        .with_context(|| format!("failed to open store at {}", config.store))?;

    let server = Server::new(config, store);
    let listener = server
        .bind()
        .await
        .with_context(|| format!("failed to bind {}", server.config().bind_address()))?;
    server.serve(listener).await?;
    Ok(())
}
