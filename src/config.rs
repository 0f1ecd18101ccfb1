use std::env;
use std::time::Duration;

use crate::auth::adapter::incoming::web::extractors::DEFAULT_SESSION_COOKIE_NAMES;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub run_migrations: bool,
    pub content_requires_session: bool,
    pub session_cookie_names: Vec<String>,
    /// `None` disables the expired-record sweeper.
    pub sweep_interval: Option<Duration>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or(&lookup, "PORT", 8080u16)?;

        let database = DatabaseConfig {
            url: database_url(&lookup)?,
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 20u32)?,
            min_connections: parse_or(&lookup, "DATABASE_MIN_CONNECTIONS", 2u32)?,
            connect_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DATABASE_CONNECT_TIMEOUT_SECS",
                5u64,
            )?),
        };

        if database.min_connections > database.max_connections {
            return Err(ConfigError::Invalid {
                key: "DATABASE_MIN_CONNECTIONS",
                value: database.min_connections.to_string(),
            });
        }

        let session_cookie_names = match lookup("SESSION_COOKIE_NAMES") {
            Some(raw) => {
                let names: Vec<String> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect();
                if names.is_empty() {
                    return Err(ConfigError::Invalid {
                        key: "SESSION_COOKIE_NAMES",
                        value: raw,
                    });
                }
                names
            }
            None => DEFAULT_SESSION_COOKIE_NAMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };

        let sweep_secs = parse_or(&lookup, "SWEEP_INTERVAL_SECS", 0u64)?;

        Ok(Self {
            host,
            port,
            database,
            run_migrations: parse_bool(&lookup, "RUN_MIGRATIONS", true)?,
            content_requires_session: parse_bool(&lookup, "CONTENT_REQUIRE_SESSION", false)?,
            session_cookie_names,
            sweep_interval: (sweep_secs > 0).then(|| Duration::from_secs(sweep_secs)),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `DATABASE_URL` wins when it is a full URL. Older deployments put only the
/// host there, so anything without a scheme is treated as the host.
fn database_url<F>(lookup: &F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let from_url_var = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty());

    if let Some(url) = from_url_var.as_deref() {
        if url.contains("://") {
            return Ok(url.to_string());
        }
    }

    let host = from_url_var
        .or_else(|| lookup("DATABASE_HOST"))
        .unwrap_or_else(|| "localhost".to_string());
    let port = parse_or(lookup, "DATABASE_PORT", 5432u16)?;
    let user = lookup("DATABASE_USER").unwrap_or_else(|| "postgres".to_string());
    let password = lookup("DATABASE_PASSWORD").ok_or(ConfigError::Missing("DATABASE_PASSWORD"))?;
    let name = lookup("DATABASE_NAME").unwrap_or_else(|| "db".to_string());

    Ok(format!(
        "postgres://{user}:{password}@{host}:{port}/{name}"
    ))
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}

fn parse_bool<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::Invalid { key, value: raw }),
    }
}
