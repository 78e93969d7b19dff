//! Application configuration loaded from environment variables.

use std::env;

use blog_infra::database::DatabaseConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let mut database = DatabaseConfig::new(url);
        if let Some(max) = parse_var(&get, "DB_MAX_CONNECTIONS")? {
            database.max_connections = max;
        }
        if let Some(min) = parse_var(&get, "DB_MIN_CONNECTIONS")? {
            database.min_connections = min;
        }

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_var(&get, "PORT")?.unwrap_or(8080),
            database,
        })
    }
}

fn parse_var<F, T>(get: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match get(name) {
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(None),
    }
}
