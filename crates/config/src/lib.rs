use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const IN_MEMORY_DATABASE: &str = ":memory:";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StorageBackend::Sqlite),
            "memory" => Ok(StorageBackend::Memory),
            _ => Err(()),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Sqlite => f.write_str("sqlite"),
            StorageBackend::Memory => f.write_str("memory"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub database_pool_size: u32,
    pub storage_backend: StorageBackend,
    pub api_host: String,
    pub api_port: u16,
}

impl Config {
    /// Load configuration from the environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            database_path: lookup("DATABASE_PATH").unwrap_or_else(|| "customers.db".to_string()),
            database_pool_size: parse_or(&lookup, "DATABASE_POOL_SIZE", 8)?,
            storage_backend: parse_or(&lookup, "STORAGE_BACKEND", StorageBackend::Sqlite)?,
            api_host: lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            api_port: parse_or(&lookup, "API_PORT", 3000)?,
        };

        if config.database_pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                name: "DATABASE_POOL_SIZE",
                value: "0".to_string(),
            });
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }

    pub fn is_in_memory_database(&self) -> bool {
        self.database_path == IN_MEMORY_DATABASE
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value: raw }),
    }
}
