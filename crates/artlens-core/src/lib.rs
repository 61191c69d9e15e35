//! # ArtLens Core
//!
//! Core scoring pipeline for the ArtLens artwork authenticity service.
//!
//! ## Key Concepts
//!
//! - **Sub-score**: one of three independent bounded heuristics (quality,
//!   uniqueness, consistency) derived from an artwork object
//! - **Verdict**: the combined authenticity result, including the weighted
//!   score and confidence/risk tiers
//! - **Verification token**: a short opaque string binding the object
//!   identifier, score, and issuance time
//!
//! ## Invariants
//!
//! 1. Every sub-score lies within its closed interval for any input,
//!    including empty or malformed blobs
//! 2. The combined authenticity score lies within [70, 100]
//! 3. Sub-scores and verdicts are pure functions of their inputs; only the
//!    verification token carries a caller-supplied timestamp

pub mod analyzer;
pub mod consistency;
pub mod error;
pub mod probe;
pub mod quality;
pub mod token;
pub mod types;
pub mod uniqueness;
pub mod verdict;

pub use analyzer::ArtworkAnalyzer;
pub use error::{AnalysisError, Result};
pub use types::{
    AnalysisDetail, ConfidenceTier, ObjectMetadata, RiskTier, ScoringWeights, SubScores, Verdict,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the library version
pub fn version() -> &'static str {
    VERSION
}
