//! Error types for the completion layer.

use thiserror::Error;

/// Errors that can occur when talking to a completion service.
#[derive(Error, Debug)]
pub enum CompletionError {
    /// Missing or invalid credentials / configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Transport-level failure (connection, TLS, timeout, decoding).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with an error payload.
    #[error("completion API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response carried no usable completion text.
    #[error("empty completion response")]
    EmptyResponse,
}
