//! API module for the analysis service

pub mod error;
pub mod handlers;

use axum::{
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::AppState;

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "ArtLens AI Analysis Service";

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub endpoints: Vec<String>,
}

/// Health check endpoint
///
/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        service: SERVICE_NAME.into(),
        version: env!("CARGO_PKG_VERSION").into(),
        timestamp: Utc::now(),
        endpoints: vec!["/analyze-artwork".into(), "/analysis/:hash".into()],
    })
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration for the browser UI
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health endpoint
        .route("/health", get(health))
        // Analysis endpoints
        .route("/analyze-artwork", post(handlers::analyze_artwork))
        .route("/analysis/{hash}", get(handlers::get_analysis))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
