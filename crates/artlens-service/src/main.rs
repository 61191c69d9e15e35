//! ArtLens Analysis Service Binary
//!
//! Runs the HTTP server for artwork authenticity scoring.

use std::env;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use artlens_core::ArtworkAnalyzer;
use artlens_service::{create_router, AppState, HttpGateway, ServiceConfig};

#[tokio::main]
async fn main() {
    // Initialize logging
    let log_level = env::var("ARTLENS_LOG_LEVEL")
        .unwrap_or_else(|_| "info".into())
        .parse()
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    // Configuration
    let config = ServiceConfig::from_env();

    let gateway = Arc::new(HttpGateway::new(&config.gateway_url, config.fetch_timeout));

    info!(
        port = config.port,
        gateway = %config.gateway_url,
        fetch_timeout_secs = config.fetch_timeout.as_secs(),
        "Starting ArtLens analysis service"
    );

    // Create application state
    let state = Arc::new(AppState {
        analyzer: ArtworkAnalyzer::new(),
        gateway,
    });

    // Build router
    let app = create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    info!(addr = %addr, "ArtLens listening");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
