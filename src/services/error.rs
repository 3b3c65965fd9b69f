use thiserror::Error;

/// Errors raised by the classifier adapters
///
/// These never reach the core: callers swap them for the `UNKNOWN` sentinel
/// at the point the result is consumed.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Analysis API returned error: {0}")]
    Api(String),

    #[error("Image file not found: {0}")]
    ImageNotFound(String),

    #[error("No face detected in image")]
    NoFaceDetected,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Bio text is empty after cleaning")]
    EmptyText,
}
