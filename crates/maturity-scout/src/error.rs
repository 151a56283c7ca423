//! Typed errors for the single-domain pipeline.
//!
//! Every variant is recovered at the domain boundary: the pipeline for that
//! domain stops and the `Display` text becomes the reported failure reason.

use thiserror::Error;

/// Maximum number of characters kept from an underlying transport error.
pub const DETAIL_LIMIT: usize = 80;

/// Why one domain could not be analyzed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// Input was empty or could not be turned into an absolute URL.
    #[error("invalid URL input: {input:?}")]
    Validation { input: String },

    /// The remote host could not be reached.
    #[error("connection failed")]
    ConnectionFailure,

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-2xx status.
    #[error("HTTP {code}")]
    HttpStatus { code: u16 },

    /// Any other transport-level failure (detail already truncated).
    #[error("transport error: {detail}")]
    Transport { detail: String },
}

impl AnalysisError {
    /// Build a `Transport` error, truncating the message to [`DETAIL_LIMIT`] chars.
    pub fn transport(detail: impl std::fmt::Display) -> Self {
        let detail: String = detail.to_string().chars().take(DETAIL_LIMIT).collect();
        AnalysisError::Transport { detail }
    }

    /// Build a `Validation` error for the raw user input.
    pub fn validation(input: &str) -> Self {
        AnalysisError::Validation {
            input: input.to_string(),
        }
    }

    /// Short machine-readable kind, used in JSON output and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::Validation { .. } => "validation",
            AnalysisError::ConnectionFailure => "connection_failure",
            AnalysisError::Timeout => "timeout",
            AnalysisError::HttpStatus { .. } => "http_status",
            AnalysisError::Transport { .. } => "transport",
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AnalysisError::Timeout
        } else if err.is_connect() {
            AnalysisError::ConnectionFailure
        } else if let Some(status) = err.status() {
            AnalysisError::HttpStatus {
                code: status.as_u16(),
            }
        } else {
            AnalysisError::transport(err)
        }
    }
}

/// Errors raised before a batch can start.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchError {
    /// The batch input contained no candidate URLs at all.
    #[error("no URLs to analyze")]
    EmptyInput,
}

/// Result alias for single-domain operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
