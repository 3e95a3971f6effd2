//! Error types for content extraction.
//!
//! Every variant aborts extraction for the request; no partial record is
//! ever returned alongside an error.

use thiserror::Error;

/// Coarse failure classes surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The document could not be retrieved.
    Fetch,
    /// The document was retrieved but could not be turned into a record.
    Parse,
}

/// Errors that can occur while extracting a paper.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The reference is not an absolute http(s) URL.
    #[error("invalid paper reference '{reference}': {reason}")]
    InvalidReference {
        /// The reference as received.
        reference: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Network-level error (DNS, connection refused, TLS, timeout, body read).
    #[error("network error fetching {url}: {source}")]
    Network {
        /// The URL being fetched.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// Non-success HTTP status.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus {
        /// The URL being fetched.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The bytes could not be decoded as a PDF document.
    #[error("failed to decode PDF from {url}: {reason}")]
    PdfDecode {
        /// The URL the bytes came from.
        url: String,
        /// Decoder message.
        reason: String,
    },

    /// The document decoded but yielded no text.
    #[error("no text content extracted from {url}")]
    EmptyContent {
        /// The URL the document came from.
        url: String,
    },

    /// The fetch client could not be constructed.
    #[error("HTTP client construction failed: {source}")]
    ClientBuild {
        /// The builder error.
        #[source]
        source: reqwest::Error,
    },
}

impl ExtractError {
    /// Creates an `InvalidReference` error.
    #[must_use]
    pub fn invalid_reference(reference: &str, reason: &str) -> Self {
        Self::InvalidReference {
            reference: reference.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates a `Network` error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates an `HttpStatus` error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates a `PdfDecode` error.
    pub fn pdf_decode(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PdfDecode {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Creates an `EmptyContent` error.
    pub fn empty_content(url: impl Into<String>) -> Self {
        Self::EmptyContent { url: url.into() }
    }

    /// Classifies the error as a fetch or parse failure.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidReference { .. }
            | Self::Network { .. }
            | Self::HttpStatus { .. }
            | Self::ClientBuild { .. } => FailureKind::Fetch,
            Self::PdfDecode { .. } | Self::EmptyContent { .. } => FailureKind::Parse,
        }
    }
}
