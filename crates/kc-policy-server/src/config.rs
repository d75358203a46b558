//! Server configuration.
//!
//! Configuration is loaded from environment variables with sensible defaults.

use kc_admin_client::AdminSessionConfig;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server host to bind to.
    pub host: String,

    /// Server port.
    pub port: u16,

    /// Base URL of the Keycloak server to administer.
    pub keycloak_url: String,

    /// Realm used for the administrative login.
    pub login_realm: String,

    /// Client ID used for the admin password grant.
    pub admin_client_id: String,

    /// Administrator username.
    pub admin_username: String,

    /// Administrator password.
    pub admin_password: String,

    /// Realm whose password policy is reconciled.
    pub target_realm: String,

    /// Desired password policy applied by the update endpoint
    /// (option `desired-policy-string`).
    pub desired_policy: String,

    /// Outbound request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Log level.
    pub log_level: String,
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let host = std::env::var("KC_POLICY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("KC_POLICY_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8090);

        let keycloak_url =
            std::env::var("KC_SERVER_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

        let login_realm =
            std::env::var("KC_LOGIN_REALM").unwrap_or_else(|_| "master".to_string());

        let admin_client_id =
            std::env::var("KC_ADMIN_CLIENT_ID").unwrap_or_else(|_| "admin-cli".to_string());

        let admin_username = std::env::var("KC_ADMIN_USERNAME").map_err(|_| {
            anyhow::anyhow!("KC_ADMIN_USERNAME environment variable is required")
        })?;

        let admin_password = std::env::var("KC_ADMIN_PASSWORD").map_err(|_| {
            anyhow::anyhow!("KC_ADMIN_PASSWORD environment variable is required")
        })?;

        let target_realm =
            std::env::var("KC_TARGET_REALM").unwrap_or_else(|_| "master".to_string());

        // An empty value is accepted at load time; the update endpoint
        // rejects it when invoked.
        let desired_policy = std::env::var("KC_DESIRED_POLICY_STRING").unwrap_or_default();

        let request_timeout_secs = std::env::var("KC_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            host,
            port,
            keycloak_url,
            login_realm,
            admin_client_id,
            admin_username,
            admin_password,
            target_realm,
            desired_policy,
            request_timeout_secs,
            log_level,
        })
    }

    /// Creates a configuration for testing.
    #[must_use]
    pub fn for_testing(keycloak_url: &str, desired_policy: &str) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0, // Random port
            keycloak_url: keycloak_url.to_string(),
            login_realm: "master".to_string(),
            admin_client_id: "admin-cli".to_string(),
            admin_username: "admin".to_string(),
            admin_password: "admin".to_string(),
            target_realm: "master".to_string(),
            desired_policy: desired_policy.to_string(),
            request_timeout_secs: 5,
            log_level: "debug".to_string(),
        }
    }

    /// Returns the configuration for the outbound admin session.
    #[must_use]
    pub fn admin_session_config(&self) -> AdminSessionConfig {
        AdminSessionConfig {
            server_url: self.keycloak_url.clone(),
            login_realm: self.login_realm.clone(),
            client_id: self.admin_client_id.clone(),
            username: self.admin_username.clone(),
            password: self.admin_password.clone(),
            timeout_secs: self.request_timeout_secs,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8090,
            keycloak_url: "http://localhost:8080".to_string(),
            login_realm: "master".to_string(),
            admin_client_id: "admin-cli".to_string(),
            admin_username: "admin".to_string(),
            admin_password: "admin".to_string(),
            target_realm: "master".to_string(),
            desired_policy: String::new(),
            request_timeout_secs: 30,
            log_level: "info".to_string(),
        }
    }
}
