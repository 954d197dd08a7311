//! Client side of the generation service.
//!
//! `GenerationClient` is the seam between the session state and the network;
//! `HttpGenerationClient` is the production implementation.

pub mod errors;
pub mod http;

use std::time::Instant;

use async_trait::async_trait;
use synthgen_core::{GenerationRequest, ResultSet, Session};

pub use errors::GenerationError;
pub use http::{DEFAULT_ENDPOINT, HttpGenerationClient, parse_rows};

/// Sends one request and returns the parsed rows.
///
/// Implementations must not touch any shared result state; committing the
/// rows is the caller's job.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn submit(&self, request: &GenerationRequest) -> Result<ResultSet, GenerationError>;
}

/// Runs one request with structured logging around it.
pub async fn run_request(
    client: &dyn GenerationClient,
    request: &GenerationRequest,
) -> Result<ResultSet, GenerationError> {
    tracing::info!(
        event = "generation_started",
        domain = %request.domain_label,
        records = request.record_count
    );
    let timer = Instant::now();

    match client.submit(request).await {
        Ok(rows) => {
            tracing::info!(
                event = "generation_finished",
                rows = rows.len(),
                duration_ms = timer.elapsed().as_millis() as u64
            );
            Ok(rows)
        }
        Err(err) => {
            tracing::warn!(event = "generation_failed", error = %err);
            Err(err)
        }
    }
}

/// Guarded submit: starts the session's request, awaits the client, and
/// resolves the session. Returns the row count on success.
///
/// When the session cannot generate, the client is never called.
pub async fn submit_session(
    session: &mut Session,
    client: &dyn GenerationClient,
) -> Result<usize, GenerationError> {
    let request = session.begin_generation().map_err(|reason| {
        tracing::info!(event = "submit_blocked", reason = %reason);
        GenerationError::from(reason)
    })?;

    match run_request(client, &request).await {
        Ok(rows) => {
            let count = rows.len();
            session.finish_generation(Ok(rows));
            Ok(count)
        }
        Err(err) => {
            session.finish_generation(Err(err.to_string()));
            Err(err)
        }
    }
}
