// ABOUTME: Shared application state for the porter HTTP server.
// ABOUTME: Holds the loaded configuration and the active authentication strategy handle.

use std::sync::Arc;

use porter_auth::AuthStrategy;

use crate::config::ServerConfig;

/// Shared application state accessible by all Axum handlers.
///
/// Assembled once at startup and read-only afterwards; concurrent request
/// tasks share it through an `Arc` without locking.
pub struct AppState {
    pub config: ServerConfig,
    pub strategy: Arc<dyn AuthStrategy>,
}

/// Type alias for the Arc-wrapped state used with Axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Create a new AppState from the loaded configuration and the
    /// strategy it selected.
    pub fn new(config: ServerConfig, strategy: Arc<dyn AuthStrategy>) -> Self {
        Self { config, strategy }
    }
}
