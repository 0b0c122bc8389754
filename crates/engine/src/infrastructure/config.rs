//! Application configuration

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// TCP port to bind
    pub port: u16,
    /// Upper bound on handling a single request
    pub request_timeout: Duration,
    /// CORS allowed origins ("*" for any); `None` leaves CORS off
    pub cors_allowed_origins: Option<Vec<String>>,
}

/// Storage configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// sqlx SQLite URL, e.g. `sqlite::memory:` or `sqlite:notepost.db`
    pub url: String,
    /// Pool upper bound on concurrently open connections
    pub max_connections: u32,
    /// Log every SQL statement at debug level
    pub log_statements: bool,
}

impl DatabaseConfig {
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let max_connections: u32 = var("DATABASE_MAX_CONNECTIONS", "100")
            .parse()
            .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?;
        if max_connections == 0 {
            bail!("DATABASE_MAX_CONNECTIONS must be at least 1");
        }

        Ok(Self {
            server: ServerConfig {
                host: var("HOST", "0.0.0.0"),
                port: var("PORT", "3000")
                    .parse()
                    .context("PORT must be a valid port number")?,
                request_timeout: Duration::from_secs(
                    var("REQUEST_TIMEOUT_SECONDS", "10")
                        .parse()
                        .context("REQUEST_TIMEOUT_SECONDS must be a whole number of seconds")?,
                ),
                cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|raw| {
                        raw.split(',')
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .collect::<Vec<_>>()
                    })
                    .filter(|origins| !origins.is_empty()),
            },
            database: DatabaseConfig {
                url: var("DATABASE_URL", "sqlite::memory:"),
                max_connections,
                log_statements: parse_flag(&var("DATABASE_LOG_STATEMENTS", "false")),
            },
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
