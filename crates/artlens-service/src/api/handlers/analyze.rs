//! Artwork Analysis Handler
//!
//! The main entry point: validates the request, drives the
//! fetch -> score -> verdict pipeline, and assembles the response envelope.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use artlens_core::{ArtworkAnalyzer, Verdict};

use crate::api::error::ApiError;
use crate::fetch::{fetch_object, ObjectGateway};

/// Title used for scoring when the request carries none
pub const DEFAULT_TITLE: &str = "Untitled";

/// Title echoed in the response when the request carries none
pub const DEFAULT_TITLE_ECHO: &str = "Untitled Artwork";

/// Application state shared across handlers
pub struct AppState {
    /// Scoring pipeline
    pub analyzer: ArtworkAnalyzer,
    /// Object gateway transport
    pub gateway: Arc<dyn ObjectGateway>,
}

/// Request to analyze an artwork object
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Content-addressed identifier of the artwork object
    ///
    /// Optional at the serde layer so a missing field produces the service's
    /// own validation error instead of a deserialization rejection.
    #[serde(default)]
    pub ipfs_hash: Option<String>,

    /// Artwork title
    #[serde(default)]
    pub artwork_title: Option<String>,
}

/// Response envelope from artwork analysis
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    pub ipfs_hash: String,
    pub artwork_title: String,
    #[serde(rename = "fetchedFromIPFS")]
    pub fetched_from_ipfs: bool,
    pub timestamp: DateTime<Utc>,
    pub ai_analysis: Verdict,
}

/// Analyze an artwork object
///
/// POST /analyze-artwork
///
/// Validation failures are the only client-visible errors. A failed gateway
/// fetch degrades to a synthetic blob (`fetchedFromIPFS: false`), and an
/// unexpected scoring failure degrades to the fixed moderate verdict; both
/// still answer 200.
pub async fn analyze_artwork(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let ipfs_hash = match request.ipfs_hash.as_deref() {
        Some(hash) if !hash.is_empty() => hash.to_string(),
        _ => return Err(ApiError::BadRequest("IPFS hash is required".into())),
    };

    // An empty title counts as absent, matching the original service
    let title = request
        .artwork_title
        .as_deref()
        .filter(|t| !t.is_empty());

    info!(
        ipfs_hash = %ipfs_hash,
        title = title.unwrap_or(DEFAULT_TITLE),
        "New analysis request"
    );

    let fetched = fetch_object(state.gateway.as_ref(), &ipfs_hash).await;

    let analyzed_at = Utc::now();
    let verdict = state
        .analyzer
        .analyze(
            &ipfs_hash,
            title.unwrap_or(DEFAULT_TITLE),
            &fetched.bytes,
            analyzed_at,
        )
        .unwrap_or_else(|err| {
            warn!(ipfs_hash = %ipfs_hash, error = %err, "Analysis failed, returning degraded verdict");
            state.analyzer.degraded(&ipfs_hash, analyzed_at)
        });

    info!(
        ipfs_hash = %ipfs_hash,
        score = verdict.authenticity_score,
        confidence = ?verdict.confidence,
        fetched_from_gateway = fetched.from_gateway,
        "Analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        success: true,
        ipfs_hash,
        artwork_title: title.unwrap_or(DEFAULT_TITLE_ECHO).to_string(),
        fetched_from_ipfs: fetched.from_gateway,
        timestamp: Utc::now(),
        ai_analysis: verdict,
    }))
}
