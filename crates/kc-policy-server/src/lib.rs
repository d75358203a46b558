//! # kc-policy-server
//!
//! HTTP service that reconciles a Keycloak realm's password policy with
//! a statically configured value.
//!
//! The server wires an [`AdminSession`](kc_admin_client::AdminSession)
//! bound to the target realm into a
//! [`PolicyReconciler`](kc_policy::PolicyReconciler) and exposes it over
//! two routes:
//!
//! - `GET /api/password-policy` returns the current policy of the target realm
//! - `POST /api/password-policy/update` applies the configured policy
//!
//! ## Usage
//!
//! ```ignore
//! use kc_policy_server::{Server, ServerConfig};
//!
//! let config = ServerConfig::from_env()?;
//! let server = Server::new(config)?;
//! server.run().await?;
//! ```

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use router::create_router;
pub use state::AppState;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use kc_admin_client::AdminSession;
use kc_policy::PolicyReconciler;
use tokio::net::TcpListener;

/// The password policy server.
pub struct Server {
    config: ServerConfig,
    state: AppState,
}

impl Server {
    /// Creates a new server instance.
    ///
    /// This builds the admin session for the configured Keycloak server
    /// and binds the reconciler to the target realm.
    pub fn new(config: ServerConfig) -> anyhow::Result<Self> {
        let session = AdminSession::new(config.admin_session_config())?;
        let handle = session.realm_handle(&config.target_realm);
        let reconciler = Arc::new(PolicyReconciler::new(handle));

        let state = AppState::new(config.clone(), reconciler);

        Ok(Self { config, state })
    }

    /// Runs the server.
    ///
    /// This starts the HTTP server and blocks until it receives a shutdown signal.
    pub async fn run(self) -> anyhow::Result<()> {
        let app = create_router(self.state);

        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on http://{}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Returns the server configuration.
    #[must_use]
    pub const fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Creates the router without starting the server.
    ///
    /// This is useful for integration testing.
    #[must_use]
    pub fn test_router(&self) -> Router {
        create_router(self.state.clone())
    }
}

/// Waits for a shutdown signal.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
