//! Error types for the completion and extraction pipeline.

use thiserror::Error;

/// Failure kinds surfaced by the completion engine and the extraction
/// pipeline. Every kind is individually catchable; extraction failures
/// retain the raw response text for diagnostics.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// No usable provider credentials, or a provider rejected ours.
    #[error("credentials error: {0}")]
    Credentials(String),

    #[error("{provider} rate limit exceeded: {message}")]
    RateLimited { provider: String, message: String },

    /// Provider unreachable, overloaded, or the model does not exist.
    #[error("{provider} unavailable: {message}")]
    Unavailable { provider: String, message: String },

    #[error("invalid request to {provider}: {message}")]
    InvalidRequest { provider: String, message: String },

    #[error("request to {provider} timed out: {message}")]
    Timeout { provider: String, message: String },

    #[error("all providers failed: {0}")]
    AllProvidersFailed(String),

    /// The response did not contain the expected code block or JSON shape.
    #[error("expected {expected} in response: {reason}")]
    Extraction {
        expected: &'static str,
        reason: String,
        raw: String,
    },
}

impl CompletionError {
    /// The raw response text attached to an extraction failure.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            CompletionError::Extraction { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CompletionError>;
