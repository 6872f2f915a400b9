// ABOUTME: Route definitions and handler functions for the porter HTTP API.
// ABOUTME: Assembles all routes into a single Axum Router with identity resolution applied.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::SharedState;
use crate::auth::IdentityLayer;

/// Build the complete Axum router with all routes and shared state.
///
/// The identity layer wraps every route, so handlers can rely on an
/// `Identity` extension being present.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/whoami", get(api::whoami::whoami))
        .layer(IdentityLayer::new(Arc::clone(&state.strategy)))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler. Returns 200 OK with a simple JSON body.
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
