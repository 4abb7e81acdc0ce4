//! Application configuration loaded from environment variables.

use std::env;

use quill_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Recognized variables: DB_HOST, DB_USER, DB_PASSWORD, DB_PORT,
    /// DB_NAME, DB_SSL_CA, DB_POOL_SIZE, DB_QUEUE_LIMIT, HOST, PORT.
    /// Nothing reloads at runtime.
    pub fn from_env() -> Self {
        let database = DatabaseConfig {
            host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            user: env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
            password: env::var("DB_PASSWORD").unwrap_or_default(),
            port: env::var("DB_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5432),
            name: env::var("DB_NAME").unwrap_or_else(|_| "quill".to_string()),
            ssl_root_cert: env::var("DB_SSL_CA").ok(),
            pool_size: env::var("DB_POOL_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            queue_limit: env::var("DB_QUEUE_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database,
        }
    }
}
