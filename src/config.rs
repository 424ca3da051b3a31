//! Runtime configuration sourced from the environment.

use std::env;
use std::net::{IpAddr, Ipv4Addr};

use clap::ValueEnum;
use miette::Diagnostic;
use thiserror::Error;

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("Invalid PORT value '{value}'")]
    #[diagnostic(
        code(ideas::config::invalid_port),
        help("PORT must be an integer between 0 and 65535")
    )]
    InvalidPort { value: String },

    #[error("Invalid HOST value '{value}'")]
    #[diagnostic(
        code(ideas::config::invalid_host),
        help("HOST must be an IPv4 or IPv6 address, e.g. 0.0.0.0")
    )]
    InvalidHost { value: String },

    #[error("Invalid IDEAS_STORE value '{value}'")]
    #[diagnostic(
        code(ideas::config::invalid_store),
        help("IDEAS_STORE must be 'mongo' or 'memory'")
    )]
    InvalidStore { value: String },
}

/// Which idea store backend to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StoreKind {
    #[default]
    Mongo,
    Memory,
}

/// Server configuration.
///
/// `SECRET_KEY` and the mock credential pair are loaded but not consumed by
/// any route yet.
#[derive(Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: Option<u16>,
    pub environment: Option<String>,
    pub mongodb_uri: String,
    pub mongodb_dbname: String,
    pub bearer_token_mcp: String,
    pub secret_key: String,
    pub mock_username: String,
    pub mock_password: String,
    pub store: StoreKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: None,
            environment: None,
            mongodb_uri: "mongodburi".to_string(),
            mongodb_dbname: "ideas_db".to_string(),
            bearer_token_mcp: "bearer-token-mcp".to_string(),
            secret_key: "secret-key".to_string(),
            mock_username: "admin".to_string(),
            mock_password: "admin".to_string(),
            store: StoreKind::Mongo,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("environment", &self.environment)
            .field("mongodb_dbname", &self.mongodb_dbname)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Build configuration from environment variables, falling back to defaults.
    ///
    /// Unset and empty variables both count as absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match var("HOST") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidHost { value })?,
            None => defaults.host,
        };

        let port = match var("PORT") {
            Some(value) => Some(
                value
                    .parse()
                    .map_err(|_| ConfigError::InvalidPort { value })?,
            ),
            None => None,
        };

        let store = match var("IDEAS_STORE") {
            Some(value) => StoreKind::from_str(&value, true)
                .map_err(|_| ConfigError::InvalidStore { value })?,
            None => defaults.store,
        };

        Ok(Self {
            host,
            port,
            environment: var("ENV"),
            mongodb_uri: var("MONGODB_URI").unwrap_or(defaults.mongodb_uri),
            mongodb_dbname: var("MONGODB_DBNAME").unwrap_or(defaults.mongodb_dbname),
            bearer_token_mcp: var("BEARER_TOKEN_MCP").unwrap_or(defaults.bearer_token_mcp),
            secret_key: var("SECRET_KEY").unwrap_or(defaults.secret_key),
            mock_username: var("MOCK_USERNAME").unwrap_or(defaults.mock_username),
            mock_password: var("MOCK_PASSWORD").unwrap_or(defaults.mock_password),
            store,
        })
    }

    /// Override the bind address.
    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    /// Override the listen port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Override the store backend.
    pub fn with_store(mut self, store: StoreKind) -> Self {
        self.store = store;
        self
    }

    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }
}

fn var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}
