// ABOUTME: Configuration loading and validation for the porter server.
// ABOUTME: Reads environment variables with local-development defaults and fails fast on bad values.

use std::net::SocketAddr;
use std::path::PathBuf;

use porter_auth::{AuthConfigError, AuthType};
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0:?} is not a valid bind address")]
    InvalidBind(String),

    #[error("PORT is not a valid port number: {0:?}")]
    InvalidPort(String),

    #[error(transparent)]
    Auth(#[from] AuthConfigError),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub auth_type: AuthType,
    pub config_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables with local defaults.
    ///
    /// Environment variables:
    /// - HOST: interface to bind (default: 0.0.0.0)
    /// - PORT: port to bind (default: 8000)
    /// - AUTH_TYPE: authentication strategy (default: noop)
    /// - PORTER_CONFIG: path to a deployment config file (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::with_overrides(None, None, None)
    }

    /// Load configuration, letting explicit values (CLI flags) take
    /// precedence over the environment.
    pub fn with_overrides(
        host: Option<String>,
        port: Option<u16>,
        config_path: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let host = host
            .or_else(|| std::env::var("HOST").ok())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match port {
            Some(p) => p,
            None => match std::env::var("PORT") {
                Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
                Err(_) => 8000,
            },
        };

        let bind_str = format!("{}:{}", host, port);
        let bind: SocketAddr = bind_str
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind_str))?;

        let auth_type = match std::env::var("AUTH_TYPE") {
            Ok(raw) => AuthType::from_config(Some(&raw))?,
            Err(_) => AuthType::from_config(None)?,
        };

        let config_path = config_path.or_else(|| {
            std::env::var("PORTER_CONFIG")
                .ok()
                .filter(|p| !p.is_empty())
                .map(PathBuf::from)
        });

        Ok(Self {
            bind,
            auth_type,
            config_path,
        })
    }
}
