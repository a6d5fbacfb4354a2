//! Server configuration management.
//!
//! Configuration is loaded from environment variables with sensible defaults.
//! Log filtering is left to `RUST_LOG` (see `friendbook-observability`).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// HTTP bind address
    pub host: IpAddr,
    /// HTTP port (default: 8080)
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// # Environment Variables
    /// - `FRIENDBOOK_HOST`: bind address (default: 0.0.0.0)
    /// - `FRIENDBOOK_PORT`: port (default: 8080)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(val) = lookup("FRIENDBOOK_HOST") {
            config.host = val.parse().map_err(|_| ConfigError::Invalid {
                var: "FRIENDBOOK_HOST",
                value: val.clone(),
            })?;
        }

        if let Some(val) = lookup("FRIENDBOOK_PORT") {
            config.port = val.parse().map_err(|_| ConfigError::Invalid {
                var: "FRIENDBOOK_PORT",
                value: val.clone(),
            })?;
        }

        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
