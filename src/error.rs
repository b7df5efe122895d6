//! Error types for the tmdb-rotate crate.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to callers.
///
/// Every failure is returned to the immediate caller; nothing is retried or
/// swallowed inside the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Connection or body-read failure from the HTTP layer, passed through
    /// unchanged.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The API answered with a success status but a body that does not
    /// decode into the expected shape.
    #[error("decoding response payload (status code {status}): {source}")]
    Decode {
        /// HTTP status code of the response.
        status: u16,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The API answered with a failure status and a body that is not the
    /// standard error envelope. The raw body is kept for diagnostics.
    #[error("decoding error payload (status code {status}) yields response '{body}': {source}")]
    ErrorBody {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body text.
        body: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Well-formed failure reported by the API, built from its
    /// `{status_code, status_message}` envelope.
    #[error("code ({code}): {message}")]
    Api {
        /// API-level status code (not the HTTP status).
        code: i32,
        /// Human-readable message from the API.
        message: String,
    },

    /// A proxy record could not be turned into a URL. Raised when the pool
    /// is prepared, not at first request.
    #[error("invalid proxy URL '{url}': {source}")]
    InvalidProxyUrl {
        /// The URL text that failed to parse.
        url: String,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// A value could not be serialized by the pretty-print helper.
    #[error("serializing payload: {0}")]
    Serialize(#[source] serde_json::Error),
}
