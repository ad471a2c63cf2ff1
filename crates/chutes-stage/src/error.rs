//! Error types for the stage.

use thiserror::Error;

/// Result type for stage operations that parse host input.
pub type StageResult<T> = Result<T, StageError>;

/// Errors raised while decoding host-provided text.
///
/// Turn processing never produces these; only the strict `from_json`
/// entry points do.
#[derive(Debug, Error)]
pub enum StageError {
    /// The input was not valid JSON.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON was well-formed but not shaped like a session bundle.
    #[error("invalid session bundle: {0}")]
    InvalidBundle(String),
}
