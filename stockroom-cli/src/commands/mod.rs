//! Command implementations for the stockroom CLI

pub mod init_db;
pub mod serve;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use stockroom_server::config::{DEFAULT_ACQUIRE_TIMEOUT, DEFAULT_MAX_CONNECTIONS};
use stockroom_server::DatabaseConfig;

pub use init_db::run_init_db;
pub use serve::run_serve;

/// Database connection flags shared by every command that talks to Postgres
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database host
    #[arg(id = "db_host", long = "db-host", env = "DB_HOST", default_value = "localhost")]
    pub host: String,

    /// Database port
    #[arg(id = "db_port", long = "db-port", env = "DB_PORT", default_value_t = 5432)]
    pub port: u16,

    /// Database user
    #[arg(long = "db-user", env = "DB_USER", default_value = "postgres")]
    pub user: String,

    /// Database password
    #[arg(long = "db-password", env = "DB_PASSWORD", default_value = "", hide_env_values = true)]
    pub password: String,

    /// Database name
    #[arg(long = "db-name", env = "DB_NAME", default_value = "stockroom")]
    pub database: String,

    /// Maximum pooled connections
    #[arg(long = "db-max-connections", env = "DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Seconds a request waits for a pooled connection before failing
    #[arg(
        long = "db-acquire-timeout-secs",
        env = "DB_ACQUIRE_TIMEOUT_SECS",
        default_value_t = DEFAULT_ACQUIRE_TIMEOUT.as_secs()
    )]
    pub acquire_timeout_secs: u64,
}

impl DatabaseArgs {
    /// Build and validate the database config before any connection attempt.
    pub fn into_config(self) -> Result<DatabaseConfig> {
        let config = DatabaseConfig {
            host: self.host,
            port: self.port,
            user: self.user,
            password: self.password,
            database: self.database,
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
        };
        config
            .validate()
            .context("Invalid database configuration")?;
        Ok(config)
    }
}
