//! Verdict combiner
//!
//! Applies fixed weights to the three sub-scores, clamps the result, and
//! classifies it into confidence and risk tiers.

use crate::types::{ConfidenceTier, RiskTier, ScoringWeights, SubScores};

/// Lower bound of the combined authenticity score
pub const SCORE_FLOOR: i64 = 70;

/// Upper bound of the combined authenticity score
pub const SCORE_CEILING: i64 = 100;

/// Combine sub-scores into a clamped authenticity score with tiers
///
/// The weighted sum is floored to an integer, clamped to [70, 100], and the
/// tiers are assigned from the clamped value.
pub fn combine(scores: &SubScores, weights: &ScoringWeights) -> (i64, ConfidenceTier, RiskTier) {
    let raw = scores.quality as f64 * weights.quality
        + scores.uniqueness as f64 * weights.uniqueness
        + scores.consistency as f64 * weights.consistency;

    let score = (raw.floor() as i64).clamp(SCORE_FLOOR, SCORE_CEILING);
    let (confidence, risk) = classify(score);

    (score, confidence, risk)
}

/// Assign confidence and risk tiers to a clamped score
///
/// Thresholds are evaluated highest bound first. The final branch is
/// unreachable while the score floor sits at 70; the table is kept whole so
/// every tier has a home if the clamp range ever moves.
pub fn classify(score: i64) -> (ConfidenceTier, RiskTier) {
    if score >= 90 {
        (ConfidenceTier::VeryHigh, RiskTier::VeryLow)
    } else if score >= 80 {
        (ConfidenceTier::High, RiskTier::Low)
    } else if score >= 70 {
        (ConfidenceTier::Medium, RiskTier::Medium)
    } else {
        (ConfidenceTier::Low, RiskTier::High)
    }
}
