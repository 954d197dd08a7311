use thiserror::Error;

/// Core error type shared across synthgen crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Export was requested before any generation succeeded.
    #[error("no result to export")]
    NoResult,
    #[error("invalid path: {0}")]
    InvalidPath(String),
}

/// Reasons the generate action refuses to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("domain is empty")]
    EmptyDomain,
    #[error("attribute list is empty")]
    NoAttributes,
    #[error("a generation request is already in flight")]
    InFlight,
}

/// Convenience alias for results returned by synthgen crates.
pub type Result<T> = std::result::Result<T, CoreError>;
