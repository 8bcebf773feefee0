//! Environment-based server configuration.

use std::str::FromStr;

use crate::server::error::config::ConfigError;

static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holonet.db?mode=rwc";
static DEFAULT_HOST: &str = "0.0.0.0";
static DEFAULT_PORT: u16 = 3000;
static DEFAULT_LOG_LEVEL: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// Database connection URL, PostgreSQL or SQLite.
    pub database_url: String,
    /// Address the HTTP listener binds to.
    pub host: String,
    /// Port the HTTP listener binds to.
    pub port: u16,
    /// Default tracing filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from the environment, falling back to defaults for unset variables.
    ///
    /// # Environment
    /// - `DATABASE_URL` - defaults to a SQLite file at `/tmp/holonet.db`; `postgres://` URLs are
    ///   rewritten to `postgresql://`
    /// - `HOST` - defaults to `0.0.0.0`
    /// - `PORT` - defaults to `3000`
    /// - `LOG_LEVEL` - defaults to `info`
    ///
    /// # Returns
    /// - `Ok(Config)` - All values present or defaulted and valid
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is set but cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration using the provided variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .map(|url| normalize_database_url(&url))
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        Ok(Self {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or_default(&lookup, "PORT", DEFAULT_PORT)?,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }

    /// Address for the HTTP listener in `host:port` form.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn normalize_database_url(url: &str) -> String {
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{}", rest),
        None => url.to_string(),
    }
}

fn parse_or_default<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        }),
    }
}
