//! Common types used across the scoring pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structural metadata extracted from an artwork blob
///
/// An unprobeable blob is represented by the all-zero record rather than an
/// error; downstream scoring treats that as low-resolution, unknown-format
/// input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMetadata {
    /// Width in pixels (0 when unknown)
    pub width: u32,

    /// Height in pixels (0 when unknown)
    pub height: u32,

    /// Lowercase format name, e.g. "png" or "jpg" (empty when unknown)
    pub format: String,

    /// Total blob size in bytes (0 when unknown)
    pub byte_size: usize,
}

impl ObjectMetadata {
    /// The default record used when a blob cannot be probed
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Total pixel count
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Human-readable resolution, e.g. "1920x1080"
    pub fn resolution_label(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

/// The three independent bounded sub-scores feeding the combined verdict
///
/// Invariant: `quality ∈ [65, 100]`, `uniqueness ∈ [70, 95]`,
/// `consistency ∈ [70, 94]` for every input the scorers accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScores {
    pub quality: i64,
    pub uniqueness: i64,
    pub consistency: i64,
}

/// Confidence tier assigned to a combined authenticity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceTier {
    #[serde(rename = "Very High")]
    VeryHigh,
    High,
    Medium,
    Low,
}

/// Risk tier assigned to a combined authenticity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
}

/// Fixed weights applied when combining sub-scores
///
/// Carried as an explicit value rather than module globals so the combiner
/// stays a pure function of its arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub quality: f64,
    pub uniqueness: f64,
    pub consistency: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            quality: 0.4,
            uniqueness: 0.35,
            consistency: 0.25,
        }
    }
}

/// Detail block accompanying a verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDetail {
    /// Quality sub-score
    pub image_quality: i64,

    /// Uniqueness sub-score
    pub uniqueness_score: i64,

    /// Consistency sub-score
    pub consistency_score: i64,

    /// Resolution label, e.g. "1920x1080"
    pub resolution: String,

    /// Image format name (empty when unknown)
    pub format: String,

    /// Rounded size, e.g. "142 KB"
    pub file_size: String,

    /// When the analysis was performed
    pub analysis_timestamp: DateTime<Utc>,
}

/// The combined authenticity verdict for a single request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Weighted authenticity score, clamped to [70, 100]
    pub authenticity_score: i64,

    /// Confidence tier for the score
    pub confidence: ConfidenceTier,

    /// Risk tier for the score
    pub risk_level: RiskTier,

    /// Sub-scores and structural detail
    pub analysis: AnalysisDetail,

    /// Tamper-evident verification token
    pub verification_hash: String,

    /// Elapsed scoring time, e.g. "0.2s"
    pub processing_time: String,

    /// Scoring engine label
    pub ai_model: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_metadata_is_all_zero() {
        let metadata = ObjectMetadata::unknown();

        assert_eq!(metadata.pixel_count(), 0);
        assert_eq!(metadata.resolution_label(), "0x0");
        assert!(metadata.format.is_empty());
        assert_eq!(metadata.byte_size, 0);
    }

    #[test]
    fn test_pixel_count_does_not_overflow_u32() {
        let metadata = ObjectMetadata {
            width: u32::MAX,
            height: u32::MAX,
            format: "png".into(),
            byte_size: 1,
        };

        assert_eq!(
            metadata.pixel_count(),
            u64::from(u32::MAX) * u64::from(u32::MAX)
        );
    }

    #[test]
    fn test_default_weights() {
        let weights = ScoringWeights::default();

        assert_eq!(weights.quality, 0.4);
        assert_eq!(weights.uniqueness, 0.35);
        assert_eq!(weights.consistency, 0.25);
    }

    #[test]
    fn test_tier_wire_names() {
        assert_eq!(
            serde_json::to_string(&ConfidenceTier::VeryHigh).unwrap(),
            "\"Very High\""
        );
        assert_eq!(
            serde_json::to_string(&RiskTier::VeryLow).unwrap(),
            "\"Very Low\""
        );
        assert_eq!(serde_json::to_string(&RiskTier::Medium).unwrap(), "\"Medium\"");
    }
}
