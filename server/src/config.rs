//! Host configuration parsed from environment variables.
//!
//! Recognized variables:
//! - `PORT`: listen port, default 3000
//! - `BIND_ADDR`: listen address, default `0.0.0.0`
//! - `PUBLIC_DIR`: static files served when no route matches, default `public`
//!
//! Leptos build settings (`LEPTOS_OUTPUT_NAME`, `LEPTOS_SITE_ROOT`, ...) are
//! read separately by `leptos::config::get_configuration`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be an integer in 1..=65535, got {raw:?}")]
    InvalidPort { raw: String },
    #[error("BIND_ADDR must be an IP address, got {raw:?}")]
    InvalidBindAddr { raw: String },
    #[error("PUBLIC_DIR must not be empty")]
    EmptyPublicDir,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub public_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT, public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR) }
    }
}

impl SiteConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup. Unset and blank
    /// variables fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };
        let bind_addr = match var("BIND_ADDR") {
            Some(raw) => raw.parse::<IpAddr>().map_err(|_| ConfigError::InvalidBindAddr { raw })?,
            None => DEFAULT_BIND_ADDR,
        };
        let public_dir = match lookup("PUBLIC_DIR") {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyPublicDir),
            Some(raw) => PathBuf::from(raw.trim()),
            None => PathBuf::from(DEFAULT_PUBLIC_DIR),
        };

        Ok(Self { bind_addr, port, public_dir })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort { raw: raw.to_owned() }),
    }
}
