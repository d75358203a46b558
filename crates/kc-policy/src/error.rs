//! Policy reconciliation error taxonomy.
//!
//! Every failure keeps enough of the provider's response (status code
//! and body) for the caller to log or act on; nothing is caught and
//! hidden here, and no local recovery is attempted.

use kc_admin_client::AdminClientError;
use thiserror::Error;

/// Result type alias using `PolicyError`.
pub type PolicyResult<T> = std::result::Result<T, PolicyError>;

/// Errors surfaced by policy reconciliation.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// Local precondition violation; never reaches the network.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Admin credentials were rejected by the provider.
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The target realm does not exist on the provider.
    #[error("realm not found: {0}")]
    RealmNotFound(String),

    /// Transport or provider failure while reading realm state.
    #[error("failed to fetch realm state: {0}")]
    FetchFailed(String),

    /// The provider refused the policy write. Resubmitting the same
    /// value cannot succeed.
    #[error("policy update rejected by provider: status {status}: {body}")]
    RemoteRejected {
        /// HTTP status code of the provider response.
        status: u16,
        /// Provider response body, verbatim.
        body: String,
    },

    /// The provider failed server-side while applying the write; a
    /// caller may retry with its own backoff.
    #[error("provider unavailable while applying policy: status {status}: {body}")]
    RemoteUnavailable {
        /// HTTP status code of the provider response.
        status: u16,
        /// Provider response body, verbatim.
        body: String,
    },

    /// Any failure not covered by the taxonomy, with full detail attached.
    #[error("unclassified admin API failure: {0}")]
    Unclassified(String),
}

impl PolicyError {
    /// Classifies a failure of the read phase.
    ///
    /// Read failures are uniformly retryable, so server-side errors land
    /// in `FetchFailed` alongside transport failures; only credential
    /// rejections and a missing realm are split out.
    #[must_use]
    pub fn from_fetch_failure(realm: &str, err: AdminClientError) -> Self {
        match err {
            AdminClientError::Auth(detail) => Self::AuthFailed(detail),
            AdminClientError::Api { status: 404, .. } => Self::RealmNotFound(realm.to_string()),
            AdminClientError::Api { status, body } if status == 401 || status == 403 => {
                Self::AuthFailed(format!("status {status}: {body}"))
            }
            AdminClientError::Api { status, body } if status >= 500 => {
                Self::FetchFailed(format!("status {status}: {body}"))
            }
            AdminClientError::Http(err) => Self::FetchFailed(err.to_string()),
            other => Self::Unclassified(other.to_string()),
        }
    }

    /// Classifies a failure of the write phase by response status class.
    ///
    /// A 4xx response is a rejection, a 5xx response a transient
    /// provider failure. A transport failure that never produced a
    /// response fits neither class and stays unclassified.
    #[must_use]
    pub fn from_submit_failure(err: AdminClientError) -> Self {
        match err {
            AdminClientError::Auth(detail) => Self::AuthFailed(detail),
            AdminClientError::Api { status, body } if (400..=499).contains(&status) => {
                Self::RemoteRejected { status, body }
            }
            AdminClientError::Api { status, body } if (500..=599).contains(&status) => {
                Self::RemoteUnavailable { status, body }
            }
            other => Self::Unclassified(other.to_string()),
        }
    }

    /// Returns whether a caller-side retry could plausibly succeed.
    ///
    /// Rejections are final: resubmitting an identical policy cannot
    /// change the outcome.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::FetchFailed(_) | Self::RemoteUnavailable { .. })
    }
}
