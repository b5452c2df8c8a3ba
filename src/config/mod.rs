//! Server configuration.
//!
//! Every option can be given as a command-line flag or through the
//! environment. Without a database URL the server keeps tasks in memory.

use clap::Parser;
use std::net::SocketAddr;
use thiserror::Error;

/// Default number of pooled Postgres connections.
pub const DEFAULT_POOL_SIZE: u32 = 8;

/// Command-line and environment configuration for the task server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "tasktrack-server", about = "Task tracking HTTP API", version)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    #[arg(long, env = "TASKTRACK_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Postgres connection URL; tasks are kept in memory when absent.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "TASKTRACK_POOL_SIZE", default_value_t = DEFAULT_POOL_SIZE)]
    pub pool_size: u32,

    /// Create the tasks table at start-up if it does not exist.
    #[arg(long, env = "TASKTRACK_APPLY_SCHEMA", default_value_t = false)]
    pub apply_schema: bool,
}

/// Where tasks are stored, as resolved from a [`ServerConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreSelection {
    /// Process-local store; contents are lost on exit.
    InMemory,
    /// Postgres through a pooled Diesel connection.
    Postgres {
        /// Connection URL.
        url: String,
        /// Maximum pool size.
        pool_size: u32,
        /// Whether to run the bundled schema before serving.
        apply_schema: bool,
    },
}

/// Configuration combinations the server refuses to start with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The connection pool must hold at least one connection.
    #[error("pool size must be at least 1")]
    ZeroPoolSize,

    /// A database URL was supplied but is blank.
    #[error("database URL must not be empty")]
    EmptyDatabaseUrl,

    /// Schema application was requested without a database.
    #[error("--apply-schema requires --database-url")]
    SchemaWithoutDatabase,
}

impl ServerConfig {
    /// Validates the options and resolves the task store to use.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the options cannot be combined.
    pub fn store(&self) -> Result<StoreSelection, ConfigError> {
        if self.pool_size == 0 {
            return Err(ConfigError::ZeroPoolSize);
        }
        match self.database_url.as_deref().map(str::trim) {
            None if self.apply_schema => Err(ConfigError::SchemaWithoutDatabase),
            None => Ok(StoreSelection::InMemory),
            Some("") => Err(ConfigError::EmptyDatabaseUrl),
            Some(url) => Ok(StoreSelection::Postgres {
                url: url.to_owned(),
                pool_size: self.pool_size,
                apply_schema: self.apply_schema,
            }),
        }
    }
}
