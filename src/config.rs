//! Environment configuration

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::completion::openai::{OpenAiConfig, DEFAULT_BASE_URL};
use crate::store::{StoreConfig, DEFAULT_DATABASE};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name} ({value:?}): {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Server settings read from the environment
#[derive(Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// `None` when `DATABASE_URL` is not set
    pub store: Option<StoreConfig>,
    pub completion: OpenAiConfig,
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Read configuration from the process environment, after loading `.env` if present
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which returns the value of a variable if set
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host = parse_or(get("HOST"), "HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?;
        let port = parse_or(get("PORT"), "PORT", DEFAULT_PORT)?;

        let database = get("DB_NAME").unwrap_or_else(|| DEFAULT_DATABASE.to_string());
        let pool_size: usize = parse_or(get("DB_POOL_SIZE"), "DB_POOL_SIZE", 16)?;
        if pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                name: "DB_POOL_SIZE",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        let store = get("DATABASE_URL").map(|url| {
            StoreConfig::new(url)
                .with_database(database)
                .with_max_pool_size(pool_size)
        });

        let timeout_secs: u64 = parse_or(get("OPENAI_TIMEOUT_SECS"), "OPENAI_TIMEOUT_SECS", 60)?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                name: "OPENAI_TIMEOUT_SECS",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        let completion = OpenAiConfig {
            api_key: get("OPENAI_API_KEY"),
            base_url: get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        };

        Ok(Self {
            host,
            port,
            store,
            completion,
            static_dir: get("STATIC_DIR").map(PathBuf::from),
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T>(value: Option<String>, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                name,
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}
