use std::path::PathBuf;
use std::sync::Arc;

use crate::errors::WikiError;

const DEFAULT_PORT: u16 = 5004;
const DEFAULT_HOST: &str = "0.0.0.0";

/// Application configuration and constants
#[derive(Debug, Clone)]
pub struct Config {
    pub entries_dir: Arc<PathBuf>,
    pub static_dir: Arc<PathBuf>,
    pub port: u16,
    pub host: String,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            entries_dir: Arc::new(PathBuf::from("entries")),
            static_dir: Arc::new(PathBuf::from("static")),
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
        }
    }

    /// Create configuration with custom values
    pub fn with_custom(
        entries_dir: PathBuf,
        static_dir: PathBuf,
        port: Option<u16>,
        host: Option<String>,
    ) -> Self {
        Self {
            entries_dir: Arc::new(entries_dir),
            static_dir: Arc::new(static_dir),
            port: port.unwrap_or(DEFAULT_PORT),
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
        }
    }

    /// Load configuration from `ENCYCLOPEDIA_*` environment variables
    pub fn from_env() -> Result<Self, WikiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, WikiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::new();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let entries_dir = non_empty("ENCYCLOPEDIA_ENTRIES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| defaults.entries_dir.as_ref().clone());
        let static_dir = non_empty("ENCYCLOPEDIA_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| defaults.static_dir.as_ref().clone());
        let port = match non_empty("ENCYCLOPEDIA_PORT") {
            Some(raw) => Some(raw.trim().parse::<u16>().map_err(|_| {
                WikiError::Config(format!("ENCYCLOPEDIA_PORT is not a valid port: {raw:?}"))
            })?),
            None => None,
        };
        let host = non_empty("ENCYCLOPEDIA_HOST");

        Ok(Self::with_custom(entries_dir, static_dir, port, host))
    }

    /// Get the socket address for binding
    pub fn socket_addr(&self) -> Result<std::net::SocketAddr, WikiError> {
        let ip: std::net::IpAddr = self
            .host
            .parse()
            .map_err(|_| WikiError::Config(format!("invalid host address: {:?}", self.host)))?;
        Ok(std::net::SocketAddr::new(ip, self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
