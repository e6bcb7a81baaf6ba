use std::net::IpAddr;
use std::str::FromStr;

use axum::http::HeaderValue;

/// A configuration variable that could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{var} must be a valid {expected}, got {value:?}")]
pub struct ConfigError {
    pub var: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Browser origins allowed to call the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `CORS_ORIGINS=*`: every origin.
    Any,
    /// An explicit list; may be empty.
    List(Vec<HeaderValue>),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from the `CORS_ORIGINS` env var: either
    /// `*` or a comma-separated list.
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Largest number of fields accepted in one submitted record (default: `64`).
    pub max_record_fields: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `MAX_RECORD_FIELDS`    | `64`                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        )?;

        Ok(Self {
            host: env_or("HOST", "0.0.0.0", "IP address")?,
            port: env_or("PORT", "3000", "u16")?,
            cors_origins,
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", "30", "u64")?,
            max_record_fields: env_or("MAX_RECORD_FIELDS", "64", "usize")?,
        })
    }
}

fn env_or<T: FromStr>(
    var: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    let value = std::env::var(var).unwrap_or_else(|_| default.into());
    value.trim().parse().map_err(|_| ConfigError {
        var,
        expected,
        value,
    })
}

/// Parse `CORS_ORIGINS`.
///
/// A lone `*` allows every origin. Otherwise the value is split on commas,
/// empty entries are dropped, and `*` may not appear among the entries.
pub fn parse_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    if raw.trim() == "*" {
        return Ok(CorsOrigins::Any);
    }

    let invalid = |origin: &str| ConfigError {
        var: "CORS_ORIGINS",
        expected: "`*` or an explicit origin list",
        value: origin.to_string(),
    };

    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            if origin == "*" {
                return Err(invalid(origin));
            }
            HeaderValue::from_str(origin).map_err(|_| invalid(origin))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}
