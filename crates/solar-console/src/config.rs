use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    #[error("invalid bind address {0:?}")]
    InvalidBind(String),
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Overrides the Leptos `site_addr` when present.
    pub server: Option<ServerConfig>,
}

impl Config {
    /// Address to listen on: `[server]` if set and valid, otherwise `site_addr`.
    pub fn listen_addr(&self, site_addr: SocketAddr) -> SocketAddr {
        let Some(server) = &self.server else {
            return site_addr;
        };
        match server.socket_addr() {
            Ok(addr) => addr,
            Err(e) => {
                tracing::warn!("{e}, using site address {site_addr}");
                site_addr
            }
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".into(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .bind
            .parse()
            .map_err(|_| ConfigError::InvalidBind(self.bind.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

pub fn try_load(path: &str) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })
}

/// Loads `path`, falling back to defaults when it is missing or malformed.
pub fn load(path: &str) -> Config {
    match try_load(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{e}, using defaults");
            Config::default()
        }
    }
}
