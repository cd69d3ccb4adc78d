// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    http_port: u16,
    database_max_connections: u32,
    request_timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_HTTP_PORT: u16 = 8080;
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 16;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

impl AppConfig {
    /// Build configuration from environment variables. `DATABASE_URL` is
    /// required; everything else falls back to a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reading from an arbitrary source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let http_port = parse_or("HTTP_PORT", &lookup, DEFAULT_HTTP_PORT)?;

        let database_max_connections = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            &lookup,
            DEFAULT_DATABASE_MAX_CONNECTIONS,
        )?;
        if database_max_connections == 0 {
            return Err(ConfigError::Invalid(
                "DATABASE_MAX_CONNECTIONS must be at least 1".into(),
            ));
        }

        let request_timeout_secs = parse_or(
            "REQUEST_TIMEOUT_SECONDS",
            &lookup,
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;
        if request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "REQUEST_TIMEOUT_SECONDS must be at least 1".into(),
            ));
        }

        Ok(Self {
            database_url,
            http_port,
            database_max_connections,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn http_port(&self) -> u16 {
        self.http_port
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.http_port)
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

fn parse_or<T, F>(key: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("{key} has an invalid value: {raw}"))),
        _ => Ok(default),
    }
}
