use std::env;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

use crate::errors::WikiError;

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_TEMPLATE_DIR: &str = "tmpl";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Application configuration and constants
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub template_dir: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }

    /// Create configuration with custom values
    pub fn with_custom(
        data_dir: PathBuf,
        template_dir: PathBuf,
        port: Option<u16>,
        host: Option<String>,
    ) -> Self {
        Self {
            data_dir,
            template_dir,
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: port.unwrap_or(DEFAULT_PORT),
        }
    }

    /// Defaults overridden by `WIKI_DATA_DIR`, `WIKI_TEMPLATE_DIR`, `WIKI_HOST` and `WIKI_PORT`
    pub fn from_env() -> Result<Self, WikiError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, WikiError> {
        let port = match lookup("WIKI_PORT") {
            Some(raw) => Some(raw.trim().parse::<u16>().map_err(|e| {
                WikiError::ConfigError(format!("invalid WIKI_PORT {:?}: {}", raw, e))
            })?),
            None => None,
        };

        Ok(Self::with_custom(
            lookup("WIKI_DATA_DIR").map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            lookup("WIKI_TEMPLATE_DIR").map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_DIR)),
            port,
            lookup("WIKI_HOST"),
        ))
    }

    /// Get the socket address for binding
    pub fn socket_addr(&self) -> Result<SocketAddr, WikiError> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| WikiError::ConfigError(format!("invalid host {:?}: {}", self.host, e)))?
            .next()
            .ok_or_else(|| WikiError::ConfigError(format!("host {:?} resolved to no address", self.host)))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
