//! Error types for text-generation backends.

use thiserror::Error;

/// Errors a [`TextGenerator`](super::TextGenerator) may return for one call.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    /// Transport failure before a response arrived (connect, timeout, TLS).
    #[error("generation request failed: {0}")]
    Network(String),

    /// Backend answered with a non-success status.
    #[error("generation backend returned HTTP {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error body or message from the backend.
        message: String,
    },

    /// Response body could not be decoded.
    #[error("failed to decode generation response: {0}")]
    Parse(String),

    /// Response decoded but carried no generated text.
    #[error("generation backend returned no content")]
    EmptyResponse,

    /// Backend could not be configured (missing key, bad client settings).
    #[error("generation backend misconfigured: {0}")]
    Config(String),
}

impl GenerationError {
    /// Creates an `Api` error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}
