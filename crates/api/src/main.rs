//! FocusFlow - productivity tracking backend
//!
//! Main entry point for the HTTP server.

use focusflow_api::{router, AppContext};
use focusflow_infra::config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging first so config loading is visible
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load environment variables from .env file
    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => info!(%err, "no .env file loaded"),
    }

    let config = config::load()?;
    let ctx = AppContext::new(&config)?;
    info!(db_path = %ctx.db.path().display(), "FocusFlow initialised");

    let listener = tokio::net::TcpListener::bind(&config.http.addr).await?;
    info!(addr = %config.http.addr, "listening");
    axum::serve(listener, router(ctx)).await?;
    Ok(())
}
