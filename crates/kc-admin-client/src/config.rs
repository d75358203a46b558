//! Admin session configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AdminClientError, AdminClientResult};

/// Configuration for an administrative session against a Keycloak server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSessionConfig {
    /// Base URL of the Keycloak server (e.g., http://localhost:8080).
    pub server_url: String,

    /// Realm used for the administrative login.
    #[serde(default = "default_login_realm")]
    pub login_realm: String,

    /// Client ID used for the password grant.
    #[serde(default = "default_client_id")]
    pub client_id: String,

    /// Administrator username.
    pub username: String,

    /// Administrator password.
    #[serde(skip_serializing)]
    pub password: String,

    /// Outbound request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Default login realm for administrative sessions.
fn default_login_realm() -> String {
    "master".to_string()
}

/// Default client ID for the password grant.
fn default_client_id() -> String {
    "admin-cli".to_string()
}

/// Default request timeout in seconds.
fn default_timeout_secs() -> u64 {
    30
}

impl AdminSessionConfig {
    /// Validates that all required fields are present.
    pub fn validate(&self) -> AdminClientResult<()> {
        if self.server_url.trim().is_empty() {
            return Err(AdminClientError::Config(
                "Keycloak server URL is empty".to_string(),
            ));
        }
        if self.username.trim().is_empty() {
            return Err(AdminClientError::Config(
                "admin username is empty".to_string(),
            ));
        }
        if self.password.is_empty() {
            return Err(AdminClientError::Config(
                "admin password is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the request timeout as a duration.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
