//! Verification token generator
//!
//! Produces the short opaque token bound to an identifier, score, and
//! issuance time. The timestamp is an explicit parameter: token stability is
//! not a guaranteed property, only the format is.

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Utc};

/// Human-readable marker prefixing every token
pub const TOKEN_MARKER: &str = "AIVERIFIED_";

/// Length of the encoded body following the marker
pub const TOKEN_BODY_LEN: usize = 24;

/// Fixed tag bound into the encoded payload
const TOKEN_TAG: &str = "ALV";

/// Issue a verification token for an identifier and score
///
/// The payload `TAG_id_score_millis` is base64-encoded and truncated to a
/// fixed prefix, so the token looks tamper-evident without being reversible
/// at a glance. Two calls with the same identifier and score but different
/// timestamps produce different tokens.
pub fn issue(object_id: &str, score: i64, issued_at: DateTime<Utc>) -> String {
    let payload = format!(
        "{}_{}_{}_{}",
        TOKEN_TAG,
        object_id,
        score,
        issued_at.timestamp_millis()
    );

    let encoded = STANDARD.encode(payload.as_bytes());
    let body: String = encoded.chars().take(TOKEN_BODY_LEN).collect();

    format!("{}{}", TOKEN_MARKER, body)
}
