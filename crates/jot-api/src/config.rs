//! Server configuration.
//!
//! All configuration is read from the environment exactly once at startup
//! into an immutable [`AppConfig`]; nothing reads environment variables at
//! request time.

use jot_core::defaults;
use jot_core::{Error, Result};

/// Immutable server configuration, assembled once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Identity provider base URL.
    pub identity_url: String,
    /// Identity provider project key, sent as the `apikey` header.
    pub identity_api_key: String,
    /// Generation service bearer key.
    pub groq_api_key: String,
    /// Generation service base URL.
    pub groq_url: String,
    /// Comma-separated CORS origin whitelist.
    pub allowed_origins: Vec<String>,
    pub max_body_bytes: usize,
    /// Upper bound on Postgres connections held by the pool.
    pub db_max_connections: u32,
}

impl AppConfig {
    /// Build the configuration from the environment.
    ///
    /// The identity and generation credentials have no sensible defaults;
    /// startup fails fast when they are missing, rather than failing on the
    /// first authenticated request.
    pub fn from_env() -> Result<Self> {
        let identity_url = require_env("IDENTITY_URL")?;
        let identity_api_key = require_env("IDENTITY_API_KEY")?;
        let groq_api_key = require_env("GROQ_API_KEY")?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/jotter".to_string());
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults::SERVER_PORT);
        let groq_url =
            std::env::var("GROQ_URL").unwrap_or_else(|_| defaults::GROQ_URL.to_string());

        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173,http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_body_bytes = std::env::var("MAX_BODY_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults::MAX_BODY_BYTES);

        let db_max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(jot_db::pool::DEFAULT_MAX_CONNECTIONS);

        Ok(Self {
            database_url,
            host,
            port,
            identity_url,
            identity_api_key,
            groq_api_key,
            groq_url,
            allowed_origins,
            max_body_bytes,
            db_max_connections,
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| Error::Config(format!("{name} must be set")))
}

#[cfg(test)]
mod tests {
    use super::*;

    // The only test in this crate that touches the process environment.
    #[test]
    fn test_from_env_reads_pool_size() {
        std::env::set_var("IDENTITY_URL", "http://localhost:9999");
        std::env::set_var("IDENTITY_API_KEY", "anon-key");
        std::env::set_var("GROQ_API_KEY", "gsk-test");

        std::env::set_var("DB_MAX_CONNECTIONS", "25");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.db_max_connections, 25);

        std::env::remove_var("DB_MAX_CONNECTIONS");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(
            config.db_max_connections,
            jot_db::pool::DEFAULT_MAX_CONNECTIONS
        );
    }
}
