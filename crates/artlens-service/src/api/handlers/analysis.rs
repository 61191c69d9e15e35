//! Cached Analysis Handler
//!
//! Recomputes a verdict for a bare identifier without touching the gateway.
//! There is no result store; sub-scores are pure functions of the identifier
//! and the synthesized blob, so the recompute is as good as a cache read.

use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use artlens_core::Verdict;

use crate::api::error::ApiError;
use crate::api::handlers::analyze::AppState;
use crate::fetch::{synthetic_blob, CACHED_BLOB_MIN_BYTES};

/// Title used for cached-analysis recomputes
const CACHED_TITLE: &str = "Cached Analysis";

/// Response envelope for a cached analysis
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedAnalysisResponse {
    pub success: bool,
    pub ipfs_hash: String,
    pub cached: bool,
    pub timestamp: DateTime<Utc>,
    pub ai_analysis: Verdict,
}

/// Retrieve an analysis for an identifier
///
/// GET /analysis/{hash}
pub async fn get_analysis(
    State(state): State<Arc<AppState>>,
    Path(ipfs_hash): Path<String>,
) -> Result<Json<CachedAnalysisResponse>, ApiError> {
    info!(ipfs_hash = %ipfs_hash, "Retrieving analysis");

    let blob = synthetic_blob(&ipfs_hash, CACHED_BLOB_MIN_BYTES);

    let analyzed_at = Utc::now();
    let verdict = state
        .analyzer
        .analyze(&ipfs_hash, CACHED_TITLE, &blob, analyzed_at)
        .unwrap_or_else(|err| {
            warn!(ipfs_hash = %ipfs_hash, error = %err, "Analysis failed, returning degraded verdict");
            state.analyzer.degraded(&ipfs_hash, analyzed_at)
        });

    Ok(Json(CachedAnalysisResponse {
        success: true,
        ipfs_hash,
        cached: true,
        timestamp: Utc::now(),
        ai_analysis: verdict,
    }))
}
