use synthgen_core::SubmitBlocked;
use thiserror::Error;

/// Failures of a single generation call.
///
/// None of these alter the result store; the caller keeps its previous state.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("expected a JSON array of rows, got {0}")]
    NotAList(&'static str),
    #[error("generation not started: {0}")]
    Blocked(#[from] SubmitBlocked),
}
