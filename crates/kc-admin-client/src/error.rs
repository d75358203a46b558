//! Admin client error types.

use thiserror::Error;

/// Errors that can occur when talking to the Keycloak Admin REST API.
///
/// Authentication failures, transport failures, and provider-side
/// rejections stay distinct so callers can choose differentiated
/// handling; response bodies are preserved verbatim.
#[derive(Debug, Error)]
pub enum AdminClientError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Credentials were rejected while obtaining an admin token.
    #[error("authentication error: {0}")]
    Auth(String),

    /// The admin API answered with a non-success status.
    #[error("admin API error: status {status}: {body}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias using `AdminClientError`.
pub type AdminClientResult<T> = Result<T, AdminClientError>;
