//! # Keycloak Password Policy Server
//!
//! Main entry point for the password policy reconciliation service.

#![forbid(unsafe_code)]
#![deny(warnings)]

use kc_policy_server::{Server, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    tracing::info!(
        keycloak = %config.keycloak_url,
        realm = %config.target_realm,
        "Keycloak password policy service starting..."
    );

    Server::new(config)?.run().await
}
