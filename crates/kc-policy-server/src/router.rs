//! Router configuration.
//!
//! This module creates the Axum router combining the policy endpoints
//! with health checks.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::ApiResult;
use crate::state::AppState;

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    // Policy routes carry the application state
    let api = Router::new()
        .route("/api/password-policy", get(get_password_policy))
        .route("/api/password-policy/update", post(update_password_policy))
        .with_state(state);

    // Health check routes
    let health = Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness_check))
        .route("/health/ready", get(readiness_check));

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api)
        .merge(health)
        .route("/", get(root))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Returns the current password policy of the target realm.
///
/// An empty body means the realm has no policy configured.
async fn get_password_policy(State(state): State<AppState>) -> ApiResult<String> {
    let policy = state.reconciler.current_policy().await?;
    Ok(policy)
}

/// Applies the configured desired policy to the target realm.
async fn update_password_policy(State(state): State<AppState>) -> ApiResult<String> {
    let applied = state
        .reconciler
        .apply_desired_policy(&state.config.desired_policy)
        .await?;

    Ok(format!(
        "Updated realm '{}' password policy to:\n{}",
        state.config.target_realm, applied
    ))
}

/// Root endpoint handler.
async fn root() -> Json<ServerInfo> {
    Json(ServerInfo {
        name: "Keycloak Password Policy Service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

/// Server information response.
#[derive(Serialize)]
pub struct ServerInfo {
    name: String,
    version: String,
}

/// Basic health check.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    })
}

/// Kubernetes liveness probe.
async fn liveness_check() -> StatusCode {
    StatusCode::OK
}

/// Kubernetes readiness probe.
async fn readiness_check() -> StatusCode {
    StatusCode::OK
}
