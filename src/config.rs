//! Host configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! `from_env` is a thin wrapper over `from_lookup`, which takes any key
//! lookup so parsing can be tested without touching the process
//! environment. `PORT` and `BIND_ADDR` override the matching half of the
//! Leptos `site_addr` (which itself honours `LEPTOS_SITE_ADDR`); unset keys
//! leave it alone. Set-but-invalid keys are errors, so a typo never silently
//! binds the wrong port.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: expected an integer in 1..=65535")]
    InvalidPort { value: String },
    #[error("invalid BIND_ADDR {value:?}: expected an IP address")]
    InvalidBindAddr { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: Option<IpAddr>,
    pub port: Option<u16>,
    /// Overrides the Leptos `site-root` that `/pkg` is served from.
    pub site_root: Option<String>,
}

impl ServerConfig {
    /// Read `PORT`, `BIND_ADDR` and `SITE_ROOT` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a value is present but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match non_empty(lookup("PORT")) {
            None => None,
            Some(value) => match value.parse::<u16>() {
                Ok(port) if port != 0 => Some(port),
                _ => return Err(ConfigError::InvalidPort { value }),
            },
        };
        let bind_addr = match non_empty(lookup("BIND_ADDR")) {
            None => None,
            Some(value) => Some(value.parse().map_err(|_| ConfigError::InvalidBindAddr { value })?),
        };
        let site_root = non_empty(lookup("SITE_ROOT"));

        Ok(Self { bind_addr, port, site_root })
    }

    /// Address to listen on: `site_addr` with any `BIND_ADDR`/`PORT`
    /// override applied.
    #[must_use]
    pub fn socket_addr(&self, site_addr: SocketAddr) -> SocketAddr {
        SocketAddr::new(
            self.bind_addr.unwrap_or_else(|| site_addr.ip()),
            self.port.unwrap_or_else(|| site_addr.port()),
        )
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
