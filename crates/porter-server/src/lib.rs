// ABOUTME: HTTP server for porter, exposing identity resolution over a REST API.
// ABOUTME: Uses Axum with a per-request identity middleware and env-driven configuration.

pub mod api;
pub mod app_state;
pub mod auth;
pub mod config;
pub mod routes;

pub use app_state::{AppState, SharedState};
pub use auth::IdentityLayer;
pub use config::{ConfigError, ServerConfig};
pub use routes::create_router;
