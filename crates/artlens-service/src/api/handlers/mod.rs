//! API request handlers

pub mod analysis;
pub mod analyze;

pub use analysis::{get_analysis, CachedAnalysisResponse};
pub use analyze::{analyze_artwork, AnalyzeRequest, AnalyzeResponse, AppState};
