//! Artwork analyzer
//!
//! Orchestrates the scoring pipeline for one request: probe the blob, derive
//! the three sub-scores, combine them into a verdict, and issue the
//! verification token. Holds no per-request state; every analysis is a pure
//! function of its arguments apart from the caller-supplied timestamp.

use std::time::Instant;

use chrono::{DateTime, Utc};

use crate::error::{AnalysisError, Result};
use crate::types::{AnalysisDetail, ScoringWeights, SubScores, Verdict};
use crate::{consistency, probe, quality, token, uniqueness, verdict};

/// Scoring engine label reported in every verdict
pub const AI_MODEL: &str = "ArtLens-AI-v1.0";

/// Fixed moderate score used when analysis fails unexpectedly
pub const DEGRADED_SCORE: i64 = 75;

/// Stateless analyzer carrying only the combiner weights
#[derive(Debug, Clone)]
pub struct ArtworkAnalyzer {
    weights: ScoringWeights,
}

impl ArtworkAnalyzer {
    /// Create an analyzer with the default weights
    pub fn new() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Create an analyzer with explicit weights
    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Run the full pipeline over a fetched blob
    ///
    /// `analyzed_at` stamps both the detail block and the verification
    /// token; passing a fixed time makes the whole verdict reproducible.
    pub fn analyze(
        &self,
        object_id: &str,
        title: &str,
        blob: &[u8],
        analyzed_at: DateTime<Utc>,
    ) -> Result<Verdict> {
        if object_id.is_empty() {
            return Err(AnalysisError::EmptyObjectId);
        }

        let started = Instant::now();

        let metadata = probe::probe_or_default(blob);

        let scores = SubScores {
            quality: quality::score(&metadata),
            uniqueness: uniqueness::score(object_id, title),
            consistency: consistency::score(blob),
        };

        let (authenticity_score, confidence, risk_level) =
            verdict::combine(&scores, &self.weights);

        Ok(Verdict {
            authenticity_score,
            confidence,
            risk_level,
            analysis: AnalysisDetail {
                image_quality: scores.quality,
                uniqueness_score: scores.uniqueness,
                consistency_score: scores.consistency,
                resolution: metadata.resolution_label(),
                format: metadata.format.clone(),
                file_size: file_size_label(metadata.byte_size),
                analysis_timestamp: analyzed_at,
            },
            verification_hash: token::issue(object_id, authenticity_score, analyzed_at),
            processing_time: elapsed_label(started),
            ai_model: AI_MODEL.to_string(),
        })
    }

    /// The fixed moderate verdict handed out when analysis fails
    ///
    /// Score 75, Medium confidence, Medium risk, with a token still issued
    /// so downstream consumers always receive one.
    pub fn degraded(&self, object_id: &str, analyzed_at: DateTime<Utc>) -> Verdict {
        let (confidence, risk_level) = verdict::classify(DEGRADED_SCORE);

        Verdict {
            authenticity_score: DEGRADED_SCORE,
            confidence,
            risk_level,
            analysis: AnalysisDetail {
                image_quality: 0,
                uniqueness_score: 0,
                consistency_score: 0,
                resolution: String::new(),
                format: String::new(),
                file_size: file_size_label(0),
                analysis_timestamp: analyzed_at,
            },
            verification_hash: token::issue(object_id, DEGRADED_SCORE, analyzed_at),
            processing_time: "0.0s".to_string(),
            ai_model: AI_MODEL.to_string(),
        }
    }
}

impl Default for ArtworkAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn file_size_label(byte_size: usize) -> String {
    format!("{} KB", (byte_size as f64 / 1024.0).round() as u64)
}

fn elapsed_label(started: Instant) -> String {
    format!("{:.1}s", started.elapsed().as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ConfidenceTier, RiskTier};
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_object_id_rejected() {
        let analyzer = ArtworkAnalyzer::new();
        let result = analyzer.analyze("", "Sunset", b"blob", fixed_time());

        assert!(matches!(result, Err(AnalysisError::EmptyObjectId)));
    }

    #[test]
    fn test_opaque_blob_analysis() {
        let analyzer = ArtworkAnalyzer::new();
        let verdict = analyzer
            .analyze("QmTest123", "Sunset", b"QmTest123QmTest123", fixed_time())
            .unwrap();

        // Unprobeable blob takes the base quality score
        assert_eq!(verdict.analysis.image_quality, 70);
        assert!((70..=100).contains(&verdict.authenticity_score));
        assert!(verdict
            .verification_hash
            .starts_with(crate::token::TOKEN_MARKER));
    }

    #[test]
    fn test_analysis_deterministic_for_fixed_time() {
        let analyzer = ArtworkAnalyzer::new();
        let a = analyzer
            .analyze("QmTest123", "Sunset", b"some bytes", fixed_time())
            .unwrap();
        let b = analyzer
            .analyze("QmTest123", "Sunset", b"some bytes", fixed_time())
            .unwrap();

        assert_eq!(a.authenticity_score, b.authenticity_score);
        assert_eq!(a.analysis, b.analysis);
        assert_eq!(a.verification_hash, b.verification_hash);
    }

    #[test]
    fn test_empty_blob_still_scores() {
        let analyzer = ArtworkAnalyzer::new();
        let verdict = analyzer
            .analyze("QmEmpty", "Untitled", &[], fixed_time())
            .unwrap();

        assert_eq!(verdict.analysis.image_quality, 70);
        assert_eq!(verdict.analysis.consistency_score, 70);
        assert!((70..=100).contains(&verdict.authenticity_score));
        assert_eq!(verdict.analysis.file_size, "0 KB");
    }

    #[test]
    fn test_degraded_verdict() {
        let analyzer = ArtworkAnalyzer::new();
        let verdict = analyzer.degraded("QmTest123", fixed_time());

        assert_eq!(verdict.authenticity_score, DEGRADED_SCORE);
        assert_eq!(verdict.confidence, ConfidenceTier::Medium);
        assert_eq!(verdict.risk_level, RiskTier::Medium);
        assert!(verdict
            .verification_hash
            .starts_with(crate::token::TOKEN_MARKER));
    }

    #[test]
    fn test_file_size_label_rounds() {
        assert_eq!(file_size_label(0), "0 KB");
        assert_eq!(file_size_label(1024), "1 KB");
        assert_eq!(file_size_label(1536), "2 KB");
        assert_eq!(file_size_label(145_000), "142 KB");
    }
}
