//! Object fetching with graceful degradation
//!
//! Resolves a content-addressed identifier to a byte blob via an external
//! gateway. A single attempt is made within a fixed bound; any failure
//! synthesizes a deterministic fallback blob so the pipeline never blocks or
//! fails purely because the gateway is unavailable.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

/// Minimum length of the synthetic fallback blob for a failed fetch
pub const FALLBACK_BLOB_MIN_BYTES: usize = 100_000;

/// Minimum length of the synthesized blob for cached-analysis recomputes
pub const CACHED_BLOB_MIN_BYTES: usize = 50_000;

/// User-Agent sent on gateway requests
const USER_AGENT: &str = "ArtLens-AI/1.0";

/// Error from a single gateway attempt
///
/// Never escapes `fetch_object`; recorded only to explain the degradation.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("gateway returned status {0}")]
    Status(u16),
}

/// Transport used to resolve an identifier to raw bytes
///
/// Injected so tests substitute a deterministic fake without network access.
#[async_trait]
pub trait ObjectGateway: Send + Sync {
    async fn get(&self, object_id: &str) -> Result<Vec<u8>, GatewayError>;
}

/// Gateway client over HTTP
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Create a client for the given base URL with a per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ObjectGateway for HttpGateway {
    async fn get(&self, object_id: &str) -> Result<Vec<u8>, GatewayError> {
        let url = format!("{}/{}", self.base_url, object_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GatewayError::Status(response.status().as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}

/// A resolved blob plus whether it actually came from the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedObject {
    pub bytes: Vec<u8>,
    pub from_gateway: bool,
}

/// Fetch an object, degrading to a synthetic blob on any failure
///
/// One attempt, no retries. The fallback repeats the identifier's bytes to a
/// fixed minimum length, so downstream scoring still has deterministic input.
pub async fn fetch_object(gateway: &dyn ObjectGateway, object_id: &str) -> FetchedObject {
    match gateway.get(object_id).await {
        Ok(bytes) => {
            info!(object_id = %object_id, size = bytes.len(), "Fetched object from gateway");
            FetchedObject {
                bytes,
                from_gateway: true,
            }
        }
        Err(err) => {
            warn!(object_id = %object_id, error = %err, "Gateway fetch failed, using synthetic blob");
            FetchedObject {
                bytes: synthetic_blob(object_id, FALLBACK_BLOB_MIN_BYTES),
                from_gateway: false,
            }
        }
    }
}

/// Repeat an identifier's bytes until at least `min_len` is reached
pub fn synthetic_blob(object_id: &str, min_len: usize) -> Vec<u8> {
    // Request validation rejects empty identifiers; the guard keeps the loop
    // finite regardless
    let unit: &[u8] = if object_id.is_empty() {
        b"0"
    } else {
        object_id.as_bytes()
    };

    let mut blob = Vec::with_capacity(min_len + unit.len());
    while blob.len() < min_len {
        blob.extend_from_slice(unit);
    }

    blob
}
