//! API error types.
//!
//! Maps reconciliation failures to HTTP responses. Upstream failures
//! surface as gateway errors rather than being absorbed into a generic
//! 500, so callers can tell a local misuse from a Keycloak problem.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use kc_policy::PolicyError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned by the policy API handlers.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] PolicyError);

impl ApiError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match &self.0 {
            PolicyError::InvalidConfiguration(_) => StatusCode::BAD_REQUEST,
            PolicyError::AuthFailed(_)
            | PolicyError::RealmNotFound(_)
            | PolicyError::FetchFailed(_)
            | PolicyError::RemoteRejected { .. } => StatusCode::BAD_GATEWAY,
            PolicyError::RemoteUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            PolicyError::Unclassified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match &self.0 {
            PolicyError::InvalidConfiguration(_) => "invalid_configuration",
            PolicyError::AuthFailed(_) => "auth_failed",
            PolicyError::RealmNotFound(_) => "realm_not_found",
            PolicyError::FetchFailed(_) => "fetch_failed",
            PolicyError::RemoteRejected { .. } => "remote_rejected",
            PolicyError::RemoteUnavailable { .. } => "remote_unavailable",
            PolicyError::Unclassified(_) => "unclassified_failure",
        }
    }
}

/// API error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error: String,
    /// Human-readable error message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.error_code().to_string(),
            error_description: Some(self.to_string()),
        };
        (status, Json(body)).into_response()
    }
}

/// Result type for policy API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
