// ABOUTME: Startup-time selection of the active authentication strategy.
// ABOUTME: Maps the AUTH_TYPE configuration value to a constructed strategy instance.

use std::sync::Arc;

use thiserror::Error;

use crate::noop::NoopAuth;
use crate::strategy::AuthStrategy;

/// Errors raised while selecting an authentication strategy.
#[derive(Debug, Error)]
pub enum AuthConfigError {
    #[error("unknown auth type {0:?}; supported values: noop")]
    UnknownAuthType(String),
}

/// Recognized authentication strategy selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthType {
    /// Derive identity from a trusted header without verifying credentials.
    Noop,
}

impl AuthType {
    /// Parse the `AUTH_TYPE` configuration value.
    ///
    /// Absent, empty, and whitespace-only values select [`AuthType::Noop`].
    /// Unknown values fail startup rather than falling back silently.
    pub fn from_config(value: Option<&str>) -> Result<Self, AuthConfigError> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            None | Some("noop") => Ok(Self::Noop),
            Some(other) => Err(AuthConfigError::UnknownAuthType(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Noop => "noop",
        }
    }
}

/// Construct the strategy selected by `auth_type`.
///
/// Called once at startup; the returned handle is shared read-only across
/// request tasks for the lifetime of the process. There is no runtime
/// re-selection: tests that need a different strategy inject one directly.
pub fn build_strategy(auth_type: AuthType) -> Arc<dyn AuthStrategy> {
    tracing::debug!(auth_type = auth_type.as_str(), "selecting auth strategy");
    match auth_type {
        AuthType::Noop => Arc::new(NoopAuth),
    }
}
