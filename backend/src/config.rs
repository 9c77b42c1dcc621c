//! Service configuration loaded via OrthoConfig.
//!
//! Values are layered from CLI flags, `MOOD_*` environment variables, and
//! configuration files. Numeric fields carry OrthoConfig defaults; string
//! fields are optional and their accessors apply defaults.

use std::ffi::OsString;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::outbound::redis::{DEFAULT_KEYSPACE, RedisStoreConfig};

const DEFAULT_NOT_FOUND_MESSAGE: &str = "mood not set";
const DEFAULT_REDIS_HOST: &str = "127.0.0.1";
const DEFAULT_REDIS_PORT: u16 = 6379;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_ADDRESS: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Largest accepted request body, in bytes, unless configured otherwise.
pub const DEFAULT_BODY_LIMIT: usize = 4_194_304;

/// Errors raised while loading or interpreting settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The layered configuration could not be read.
    #[error("failed to load configuration: {message}")]
    Load {
        /// Rendered loader error.
        message: String,
    },
    /// `store` names a backend that does not exist.
    #[error("unknown mood store '{value}'; expected memory|redis")]
    UnknownStore {
        /// Value as configured.
        value: String,
    },
    /// `address` is not an IP address.
    #[error("invalid listen address '{value}'")]
    InvalidAddress {
        /// Value as configured.
        value: String,
    },
}

/// Backend selected for the mood store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Process-local map; nothing survives a restart.
    Memory,
    /// Redis hashes reached over a pooled connection.
    Redis,
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Ok(Self::Memory),
            "redis" => Ok(Self::Redis),
            _ => Err(ConfigError::UnknownStore {
                value: value.to_owned(),
            }),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => f.write_str("memory"),
            Self::Redis => f.write_str("redis"),
        }
    }
}

/// Configuration values for the mood service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MOOD")]
pub struct MoodSettings {
    /// Message returned when a user has no mood yet.
    pub not_found_message: Option<String>,
    /// Store backend: `memory` or `redis`.
    pub store: Option<String>,
    /// Redis host name or address.
    pub redis_host: Option<String>,
    /// Redis TCP port.
    #[ortho_config(default = 6379)]
    pub redis_port: u16,
    /// Redis key prefix and index set name.
    pub keyspace: Option<String>,
    /// Upper bound on pooled Redis connections.
    #[ortho_config(default = 10)]
    pub max_connections: u32,
    /// IP address the HTTP server binds to.
    pub address: Option<String>,
    /// TCP port the HTTP server binds to.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Largest accepted request body in bytes; bounds the length of a mood.
    #[ortho_config(default = 4_194_304)]
    pub body_limit: usize,
}

impl Default for MoodSettings {
    fn default() -> Self {
        Self {
            not_found_message: None,
            store: None,
            redis_host: None,
            redis_port: DEFAULT_REDIS_PORT,
            keyspace: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            address: None,
            port: DEFAULT_PORT,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl MoodSettings {
    /// Load settings from the process arguments, environment, and files.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when any layer fails to parse.
    pub fn from_process() -> Result<Self, ConfigError> {
        Self::from_args(std::env::args_os())
    }

    /// Load settings using `args` in place of the process arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when any layer fails to parse.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = OsString>,
    {
        Self::load_from_iter(args).map_err(|err| ConfigError::Load {
            message: err.to_string(),
        })
    }

    /// Message for unset moods; blank values fall back to the default.
    pub fn not_found_message(&self) -> &str {
        self.not_found_message
            .as_deref()
            .filter(|message| !message.trim().is_empty())
            .unwrap_or(DEFAULT_NOT_FOUND_MESSAGE)
    }

    /// Selected store backend, `redis` unless configured otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownStore`] for unrecognised values.
    pub fn store_kind(&self) -> Result<StoreKind, ConfigError> {
        self.store
            .as_deref()
            .map_or(Ok(StoreKind::Redis), StoreKind::from_str)
    }

    /// Redis connection settings with defaults applied.
    pub fn redis_config(&self) -> RedisStoreConfig {
        RedisStoreConfig::new(
            self.redis_host.as_deref().unwrap_or(DEFAULT_REDIS_HOST),
            self.redis_port,
        )
        .with_keyspace(self.keyspace.as_deref().unwrap_or(DEFAULT_KEYSPACE))
        .with_max_size(self.max_connections)
    }

    /// Socket address for the HTTP listener.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAddress`] when `address` is not an IP.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let address = self.address.as_deref().unwrap_or(DEFAULT_ADDRESS);
        let ip = IpAddr::from_str(address).map_err(|_| ConfigError::InvalidAddress {
            value: address.to_owned(),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
