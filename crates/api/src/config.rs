//! Runtime configuration, read from the environment.

use std::net::SocketAddr;

use thiserror::Error;

/// Socket address the server binds to.
pub const ADDR_ENV: &str = "ITEMDESK_ADDR";

pub const DEFAULT_ADDR: &str = "127.0.0.1:8000";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value:?}")]
    InvalidAddr { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = match lookup(ADDR_ENV) {
            Some(raw) => parse_addr(ADDR_ENV, &raw)?,
            None => {
                tracing::debug!("{ADDR_ENV} not set; using {DEFAULT_ADDR}");
                parse_addr(ADDR_ENV, DEFAULT_ADDR)?
            }
        };
        Ok(Self { bind_addr })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
        }
    }
}

fn parse_addr(var: &'static str, raw: &str) -> Result<SocketAddr, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidAddr {
        var,
        value: raw.to_string(),
    })
}
