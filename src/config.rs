use std::{net::SocketAddr, num::ParseIntError, time::Duration};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is not a valid number: {source}")]
    InvalidNumber {
        name: &'static str,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid listen address: {0}")]
    InvalidAddress(#[from] std::net::AddrParseError),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub supabase_url: String,
    pub supabase_anon_key: String,
    /// used as the origin when a request arrives without one
    pub site_url: Option<String>,
    pub auth_timeout: Duration,
}

impl Config {
    /// Read configuration from the process environment (after `.env` is loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };
        let number = |name: &'static str, default: &str| {
            lookup(name)
                .unwrap_or_else(|| default.to_string())
                .parse::<u64>()
                .map_err(|source| ConfigError::InvalidNumber { name, source })
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .map_err(|source| ConfigError::InvalidNumber {
                    name: "PORT",
                    source,
                })?,
            database_url: required("DATABASE_URL")?,
            supabase_url: required("SUPABASE_URL")?,
            supabase_anon_key: required("SUPABASE_ANON_KEY")?,
            site_url: lookup("SITE_URL").filter(|v| !v.trim().is_empty()),
            auth_timeout: Duration::from_secs(number("AUTH_TIMEOUT_SECS", "10")?),
        })
    }

    pub fn server_addr(&self) -> Result<SocketAddr, ConfigError> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}
