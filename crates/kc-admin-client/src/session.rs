//! Administrative session and realm handles.
//!
//! Owns the OAuth2 password-grant bootstrap against the login realm's
//! token endpoint and hands out [`RealmHandle`]s scoped to one realm.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::debug;

use crate::accessor::RealmAccessor;
use crate::config::AdminSessionConfig;
use crate::error::{AdminClientError, AdminClientResult};
use crate::realm::RealmRepresentation;

/// Safety margin subtracted from a token's lifetime before re-acquiring.
const TOKEN_EXPIRY_SLACK: Duration = Duration::from_secs(10);

/// Access token response from the token endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

/// Token lifetime assumed when the endpoint omits `expires_in`.
fn default_expires_in() -> u64 {
    60
}

/// A cached admin token with its expiry deadline.
#[derive(Debug)]
struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_valid(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

/// An authenticated administrative session against one Keycloak server.
///
/// Cloning is cheap; clones share the HTTP connection pool and the
/// token cache.
#[derive(Debug, Clone)]
pub struct AdminSession {
    http: reqwest::Client,
    config: Arc<AdminSessionConfig>,
    token: Arc<Mutex<Option<CachedToken>>>,
}

impl AdminSession {
    /// Creates a new session.
    ///
    /// ## Errors
    ///
    /// Returns `AdminClientError::Config` if the configuration is
    /// incomplete, or a transport error if the HTTP client cannot be
    /// built.
    pub fn new(config: AdminSessionConfig) -> AdminClientResult<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http,
            config: Arc::new(config),
            token: Arc::new(Mutex::new(None)),
        })
    }

    /// Returns a handle scoped to the given realm.
    #[must_use]
    pub fn realm_handle(&self, name: &str) -> RealmHandle {
        RealmHandle {
            session: self.clone(),
            realm: name.to_string(),
        }
    }

    /// Returns the server base URL without a trailing slash.
    fn base_url(&self) -> &str {
        self.config.server_url.trim_end_matches('/')
    }

    /// Returns a valid admin access token, re-acquiring it when expired.
    async fn access_token(&self) -> AdminClientResult<String> {
        let mut cached = self.token.lock().await;

        if let Some(token) = cached.as_ref() {
            if token.is_valid() {
                return Ok(token.access_token.clone());
            }
        }

        let response = self.request_token().await?;
        let lifetime =
            Duration::from_secs(response.expires_in).saturating_sub(TOKEN_EXPIRY_SLACK);
        let token = CachedToken {
            access_token: response.access_token,
            expires_at: Instant::now() + lifetime,
        };
        let access_token = token.access_token.clone();
        *cached = Some(token);

        Ok(access_token)
    }

    /// Performs the password grant against the login realm's token endpoint.
    async fn request_token(&self) -> AdminClientResult<TokenResponse> {
        let url = format!(
            "{}/realms/{}/protocol/openid-connect/token",
            self.base_url(),
            self.config.login_realm
        );

        debug!(client_id = %self.config.client_id, "requesting admin token");

        let params = [
            ("grant_type", "password"),
            ("client_id", self.config.client_id.as_str()),
            ("username", self.config.username.as_str()),
            ("password", self.config.password.as_str()),
        ];

        let response = self.http.post(&url).form(&params).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        if status.is_client_error() {
            Err(AdminClientError::Auth(format!(
                "token request rejected with status {}: {}",
                status.as_u16(),
                body
            )))
        } else {
            Err(AdminClientError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// Accessor for a single realm of the admin API.
///
/// Obtained from [`AdminSession::realm_handle`]; performs the actual
/// HTTP calls against `/admin/realms/{realm}`.
#[derive(Debug, Clone)]
pub struct RealmHandle {
    session: AdminSession,
    realm: String,
}

impl RealmHandle {
    fn realm_url(&self) -> String {
        format!("{}/admin/realms/{}", self.session.base_url(), self.realm)
    }
}

#[async_trait]
impl RealmAccessor for RealmHandle {
    fn realm_name(&self) -> &str {
        &self.realm
    }

    async fn fetch(&self) -> AdminClientResult<RealmRepresentation> {
        let token = self.session.access_token().await?;
        let response = self
            .session
            .http
            .get(self.realm_url())
            .bearer_auth(&token)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        Err(api_error(status, response).await)
    }

    async fn submit(&self, representation: &RealmRepresentation) -> AdminClientResult<()> {
        let token = self.session.access_token().await?;
        let response = self
            .session
            .http
            .put(self.realm_url())
            .bearer_auth(&token)
            .json(representation)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        Err(api_error(status, response).await)
    }
}

/// Converts a non-success admin API response into an error, preserving
/// the response body.
async fn api_error(
    status: reqwest::StatusCode,
    response: reqwest::Response,
) -> AdminClientError {
    let body = response.text().await.unwrap_or_default();
    AdminClientError::Api {
        status: status.as_u16(),
        body,
    }
}
