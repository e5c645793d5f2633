//! Application configuration loaded from environment variables.

use std::env;

use blog_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `DATABASE_URL` selects the backing store; when unset the server runs
    /// against the in-memory repository.
    pub fn from_env() -> Self {
        Self::with_database_url(env::var("DATABASE_URL").ok())
    }

    /// Test configuration: `TEST_DATABASE_URL` selects the store, and the
    /// listener binds an ephemeral port.
    pub fn from_test_env() -> Self {
        let mut config = Self::with_database_url(env::var("TEST_DATABASE_URL").ok());
        config.port = 0;
        config
    }

    fn with_database_url(url: Option<String>) -> Self {
        let database = url.map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
        }
    }
}
