//! Application state management.
//!
//! This module defines the shared state that is passed to all request handlers.

use std::sync::Arc;

use kc_admin_client::RealmHandle;
use kc_policy::PolicyReconciler;

use crate::config::ServerConfig;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: ServerConfig,

    /// Reconciler bound to the target realm.
    pub reconciler: Arc<PolicyReconciler<RealmHandle>>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ServerConfig, reconciler: Arc<PolicyReconciler<RealmHandle>>) -> Self {
        Self { config, reconciler }
    }

    /// Returns the server configuration.
    pub const fn config(&self) -> &ServerConfig {
        &self.config
    }
}
