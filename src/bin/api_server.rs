// API Server Binary Entry Point
//
// Purpose: Start the Axum API server over the farm scorer
// Usage: cargo run --features api --bin api_server

use farm_scorer_rust::{create_router, AppState};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "farm_scorer_rust=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    // Configuration from environment variables
    let catalog_path = std::env::var("CATALOG_PATH").ok().map(PathBuf::from);
    let constants_path = std::env::var("CONSTANTS_PATH").ok().map(PathBuf::from);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    tracing::info!("Configuration:");
    tracing::info!("  CATALOG_PATH: {:?}", catalog_path);
    tracing::info!("  CONSTANTS_PATH: {:?}", constants_path);
    tracing::info!("  PORT: {}", port);

    // Catalog and constants are loaded once and shared read-only
    let state = AppState::new(catalog_path.as_deref(), constants_path.as_deref())?;

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
