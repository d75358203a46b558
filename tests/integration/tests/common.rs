//! Common test utilities and fixtures.

use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use reqwest::Client;
use serde_json::{json, Value};
use tokio::sync::oneshot;
use tokio::time::sleep;

use kc_policy_server::{Server, ServerConfig};

/// In-process stand-in for the Keycloak admin API.
///
/// Serves the token endpoint and the realm read/update endpoints, and
/// can be told to fail the next update with a chosen status and body.
pub struct StubKeycloak {
    /// Base URL of the stub.
    pub base_url: String,
    state: Arc<StubState>,
}

struct StubState {
    realm_name: String,
    representation: Mutex<Value>,
    update_failure: Mutex<Option<(u16, String)>>,
}

impl StubKeycloak {
    /// Starts the stub holding the given realm representation.
    pub async fn start(realm_name: &str, representation: Value) -> anyhow::Result<Self> {
        let state = Arc::new(StubState {
            realm_name: realm_name.to_string(),
            representation: Mutex::new(representation),
            update_failure: Mutex::new(None),
        });

        let router = Router::new()
            .route(
                "/realms/{realm}/protocol/openid-connect/token",
                post(token_endpoint),
            )
            .route("/admin/realms/{realm}", get(get_realm).put(update_realm))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Stub Keycloak error: {}", e);
            }
        });

        Ok(Self { base_url, state })
    }

    /// Forces the next realm update to fail with the given status and body.
    pub fn fail_next_update(&self, status: u16, body: &str) {
        *self.state.update_failure.lock().unwrap() = Some((status, body.to_string()));
    }

    /// Returns the realm representation currently held by the stub.
    pub fn representation(&self) -> Value {
        self.state.representation.lock().unwrap().clone()
    }
}

/// Issues a static bearer token for any password grant.
async fn token_endpoint() -> Json<Value> {
    Json(json!({
        "access_token": "stub-admin-token",
        "expires_in": 300,
        "token_type": "Bearer"
    }))
}

/// Serves the realm representation.
async fn get_realm(State(state): State<Arc<StubState>>, Path(realm): Path<String>) -> Response {
    if realm != state.realm_name {
        return (StatusCode::NOT_FOUND, format!("Realm not found: {realm}")).into_response();
    }

    let representation = state.representation.lock().unwrap().clone();
    Json(representation).into_response()
}

/// Replaces the realm representation, or fails when told to.
async fn update_realm(
    State(state): State<Arc<StubState>>,
    Path(realm): Path<String>,
    Json(representation): Json<Value>,
) -> Response {
    if realm != state.realm_name {
        return (StatusCode::NOT_FOUND, format!("Realm not found: {realm}")).into_response();
    }

    if let Some((status, body)) = state.update_failure.lock().unwrap().take() {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, body).into_response();
    }

    *state.representation.lock().unwrap() = representation;
    StatusCode::NO_CONTENT.into_response()
}

/// Test environment that manages the stub Keycloak and the server.
pub struct TestEnv {
    /// Stub Keycloak admin API.
    pub keycloak: StubKeycloak,
    /// Base URL of the running policy server.
    pub base_url: String,
    /// HTTP client for testing.
    pub client: Client,
    /// Server shutdown signal.
    _shutdown_tx: oneshot::Sender<()>,
}

impl TestEnv {
    /// Starts a stub Keycloak holding `representation` and the policy
    /// server configured with `desired_policy`, targeting the `master`
    /// realm.
    pub async fn new(representation: Value, desired_policy: &str) -> anyhow::Result<Self> {
        Self::with_target_realm(representation, desired_policy, "master").await
    }

    /// Starts a test environment whose server targets `target_realm`.
    ///
    /// The stub always serves the `master` realm, so a different target
    /// exercises the missing-realm path end to end.
    pub async fn with_target_realm(
        representation: Value,
        desired_policy: &str,
        target_realm: &str,
    ) -> anyhow::Result<Self> {
        // Initialize tracing for tests
        let _ = tracing_subscriber::fmt()
            .with_env_filter("kc_policy_server=debug")
            .try_init();

        let keycloak = StubKeycloak::start("master", representation).await?;

        // Find available port for server
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let server_port = listener.local_addr()?.port();
        drop(listener);

        let base_url = format!("http://127.0.0.1:{}", server_port);

        let mut config = ServerConfig::for_testing(&keycloak.base_url, desired_policy);
        config.host = "127.0.0.1".to_string();
        config.port = server_port;
        config.target_realm = target_realm.to_string();

        // Create shutdown channel
        let (_shutdown_tx, shutdown_rx) = oneshot::channel();

        // Start server
        let server = Server::new(config)?;
        tokio::spawn(async move {
            tokio::select! {
                result = server.run() => {
                    if let Err(e) = result {
                        tracing::error!("Server error: {}", e);
                    }
                }
                _ = shutdown_rx => {
                    tracing::info!("Server shutdown requested");
                }
            }
        });

        // Wait for server
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        wait_for_server(&client, &base_url).await?;

        Ok(Self {
            keycloak,
            base_url,
            client,
            _shutdown_tx,
        })
    }
}

/// Returns a realm representation with typical unrelated fields.
pub fn master_realm(password_policy: Option<&str>) -> Value {
    let mut realm = json!({
        "id": "5a3c11b7-6f44-4c9b-9d6e-1f0d9f6f2b10",
        "realm": "master",
        "enabled": true,
        "sslRequired": "external",
        "registrationAllowed": false,
        "accessTokenLifespan": 300
    });

    if let Some(policy) = password_policy {
        realm["passwordPolicy"] = json!(policy);
    }

    realm
}

/// Waits for the server to respond to health checks.
async fn wait_for_server(client: &Client, base_url: &str) -> anyhow::Result<()> {
    for _ in 0..50 {
        if let Ok(response) = client.get(format!("{}/health", base_url)).send().await {
            if response.status().is_success() {
                return Ok(());
            }
        }
        sleep(Duration::from_millis(100)).await;
    }

    anyhow::bail!("server did not become ready in time")
}
