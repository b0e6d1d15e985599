// src/error.rs
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced by the chat core.
///
/// Transport-level rejections (malformed JSON, wrong content type, wrong
/// method) never construct this type; axum answers those before a handler
/// runs.
#[derive(Debug, Error)]
pub enum AppError {
    /// No chat client could be built. Raised at service construction and
    /// fatal to startup.
    #[error("chat client configuration: {0}")]
    Configuration(String),

    /// Whatever the LLM client invocation failed with, unchanged.
    #[error(transparent)]
    Provider(#[from] anyhow::Error),
}

// Catch-all at the HTTP boundary: anything that escapes a handler becomes
// a plain 500. Callers are not promised a structured error body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {self}");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
