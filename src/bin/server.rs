//! CPA HTTP Server Binary
//!
//! This is the main entry point for the purchase analytics REST API server.
//! It initializes the repository, optionally seeds it with a dataset file,
//! sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the local (in-memory) repository and a dataset file
//! CPA_DATA_FILE=data/dataset.json cargo run --bin cpa-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 4000)
//! - `CPA_DATA_FILE`: JSON dataset file loaded at startup (optional)
//! - `REPOSITORY_TYPE`: Repository backend (default: local)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use cpa_rust::db;
use cpa_rust::http::{create_router, AppState};
use cpa_rust::services::price_bands;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting CPA HTTP Server");

    // The band table is static; check its invariants once at startup.
    price_bands::verify_band_table();

    // Initialize global repository once and reuse it across the app
    db::init_repository().map_err(|e| anyhow::anyhow!(e))?;
    let repository = std::sync::Arc::clone(db::get_repository()?);
    info!("Repository initialized successfully");

    // Seed the repository from the configured dataset file, if any
    let config = db::RepositoryConfig::load_default();
    match config.data_file() {
        Some(path) => {
            let content = std::fs::read_to_string(&path)?;
            let dataset = serde_json::from_str(&content)?;
            let loaded = db::load_dataset(repository.as_ref(), dataset).await?;
            info!(records = loaded, file = %path.display(), "Dataset loaded");
        }
        None => {
            warn!("No dataset file configured; starting with an empty repository");
        }
    }

    // Create application state
    let state = AppState::new(repository);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(4000);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
