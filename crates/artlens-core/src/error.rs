//! Error types for the scoring pipeline

use thiserror::Error;

/// Result type alias using AnalysisError
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur in the scoring pipeline
///
/// Degradations (unreachable gateway, unparsable blob) are deliberately not
/// errors; the pipeline absorbs them and keeps scoring. These variants cover
/// the cases that genuinely cannot proceed.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Object identifier was empty
    #[error("object identifier must not be empty")]
    EmptyObjectId,

    /// Blob could not be decoded as an image
    #[error("unreadable image data: {0}")]
    UnreadableImage(String),
}

impl From<image::ImageError> for AnalysisError {
    fn from(err: image::ImageError) -> Self {
        AnalysisError::UnreadableImage(err.to_string())
    }
}

impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        AnalysisError::UnreadableImage(err.to_string())
    }
}
