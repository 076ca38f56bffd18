use crate::error::ConfigError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Replaced by the service generator before deployment.
pub const SERVICE_NAME: &str = "SERVICE_NAME";

pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";
pub const DEFAULT_ENVIRONMENT: &str = "production";

pub const HOST_VAR: &str = "HOST";
pub const PORT_VAR: &str = "PORT";
pub const DEFAULT_PORT: u16 = 8000;

/// Only an unset variable falls back to the default; an empty value is kept.
pub fn resolve_environment(value: Option<String>) -> String {
    value.unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
}

/// Non-UTF-8 values are decoded lossily rather than treated as unset.
pub fn current_environment() -> String {
    resolve_environment(
        std::env::var_os(ENVIRONMENT_VAR).map(|value| value.to_string_lossy().into_owned()),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(HOST_VAR) {
            config.host = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidHost { value, source })?;
        }

        if let Some(value) = lookup(PORT_VAR) {
            config.port = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
