//! Server settings loaded via OrthoConfig and the assembled server config.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use photos_backend::inbound::http::credential_config::CredentialSettings;
use photos_backend::outbound::persistence::PoolConfig;

/// Listener and database settings, read from `PHOTOS_*` variables,
/// configuration files and command-line flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PHOTOS")]
pub struct ServerSettings {
    /// Socket address to listen on.
    #[ortho_config(default = String::from("0.0.0.0:8080"))]
    pub bind_addr: String,
    /// PostgreSQL URL; in-memory stores are used when absent.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 10)]
    pub db_max_connections: u32,
    /// Seconds to wait for a pooled connection.
    #[ortho_config(default = 5)]
    pub db_timeout_secs: u64,
}

impl ServerSettings {
    /// Parse the configured bind address.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] of kind `InvalidInput` when the configured
    /// value is not a socket address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let raw = self.bind_addr.as_str();
        raw.parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid PHOTOS_BIND_ADDR '{raw}': {err}"),
            )
        })
    }

    /// Pool settings when a database URL is configured.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url.as_deref().filter(|url| !url.is_empty())?;
        Some(
            PoolConfig::new(url)
                .with_max_size(self.db_max_connections)
                .with_connection_timeout(Duration::from_secs(self.db_timeout_secs)),
        )
    }
}

/// Everything needed to start the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) credentials: CredentialSettings,
    pub(crate) pool_config: Option<PoolConfig>,
}

impl ServerConfig {
    /// Combine listener, credential and optional database settings.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, credentials: CredentialSettings) -> Self {
        Self {
            bind_addr,
            credentials,
            pool_config: None,
        }
    }

    /// Back the stores with PostgreSQL instead of process memory.
    #[must_use]
    pub fn with_pool_config(mut self, pool_config: Option<PoolConfig>) -> Self {
        self.pool_config = pool_config;
        self
    }
}
