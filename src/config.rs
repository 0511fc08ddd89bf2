//! Configuration module
//!
//! Defaults live in code; the single external knob is the `PORT`
//! environment variable.

use serde::Deserialize;
use std::net::SocketAddr;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

impl Config {
    /// Load configuration: in-code defaults, then the `PORT` override.
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut cfg = Self::defaults()?;
        cfg.server.port = resolve_port(std::env::var("PORT").ok().as_deref(), cfg.server.port);
        Ok(cfg)
    }

    fn defaults() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Resolve the listening port from the `PORT` environment variable value.
///
/// Unset, empty, and non-numeric values keep the fallback. `0` is passed
/// through so the OS picks an ephemeral port.
fn resolve_port(raw: Option<&str>, fallback: u16) -> u16 {
    match raw {
        Some(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                fallback
            } else {
                trimmed.parse().unwrap_or(fallback)
            }
        }
        None => fallback,
    }
}
