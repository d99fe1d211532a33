//! Server configuration from `.env`, process environment, and Leptos metadata.
//!
//! `HOST` and `PORT` pick the listen address (defaults `0.0.0.0:3000`). Asset
//! paths and the output name come from `[[workspace.metadata.leptos]]`, which
//! `cargo leptos` exports as `LEPTOS_*` variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use leptos::prelude::{LeptosOptions, get_configuration};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load .env: {0}")]
    EnvFile(String),
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),
    #[error("invalid HOST {0:?}")]
    InvalidHost(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST, port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Read `HOST` and `PORT` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHost`] or [`ConfigError::InvalidPort`]
    /// when a variable is set but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: parse_host(lookup("HOST").as_deref())?,
            port: parse_port(lookup("PORT").as_deref())?,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Load `.env` from the working directory or its parents. A missing file is
/// not an error.
///
/// # Errors
///
/// Returns [`ConfigError::EnvFile`] when the file exists but cannot be parsed.
pub fn load_env_file() -> Result<Option<PathBuf>, ConfigError> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(ConfigError::EnvFile(err.to_string())),
    }
}

/// Leptos options for asset paths and the SSR shell.
///
/// # Errors
///
/// Returns [`ConfigError::Leptos`] when the `LEPTOS_*` variables are missing
/// or malformed.
pub fn leptos_options() -> Result<LeptosOptions, ConfigError> {
    get_configuration(None)
        .map(|conf| conf.leptos_options)
        .map_err(|e| ConfigError::Leptos(e.to_string()))
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_HOST),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidHost(value.to_owned())),
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}
