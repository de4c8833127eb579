//! Error types for the consultant.

use thiserror::Error;

/// Errors from generating a reply.
#[derive(Debug, Error)]
pub enum ConsultantError {
    /// Network or TLS failure, or a non-2xx status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with an error payload.
    #[error("generation API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("could not decode generation response: {0}")]
    Decode(#[from] serde_json::Error),

    /// No API key in the configured environment variable.
    #[error("missing API key: set {0}")]
    MissingApiKey(String),

    /// Configuration could not be used.
    #[error("invalid consultant configuration: {0}")]
    Config(String),
}

/// Result type for consultant operations.
pub type ConsultantResult<T> = Result<T, ConsultantError>;
