//! Serves the task API over HTTP.
//!
//! Usage:
//!
//! ```text
//! tasktrack_server [--bind ADDR] [--database-url URL] [--pool-size N] [--apply-schema]
//! ```
//!
//! Without `--database-url` (or `DATABASE_URL`) tasks live in memory and are
//! lost when the process exits. Log output is filtered through `RUST_LOG`.

use clap::Parser;
use diesel::{
    PgConnection,
    r2d2::{ConnectionManager, Pool},
};
use std::sync::Arc;
use tasktrack::{
    api::{self, AppState},
    config::{ServerConfig, StoreSelection},
    task::{
        adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
        ports::TaskRepository,
    },
};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

const DEFAULT_LOG_FILTER: &str = "tasktrack=info,tasktrack_server=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::parse();
    let selection = config.store()?;
    let repository = open_repository(selection).await?;
    let app = api::router(AppState::new(repository));

    let listener = TcpListener::bind(config.bind).await?;
    info!(address = %listener.local_addr()?, "task API listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("task API stopped");
    Ok(())
}

async fn open_repository(selection: StoreSelection) -> Result<Arc<dyn TaskRepository>, BoxError> {
    match selection {
        StoreSelection::InMemory => {
            info!("using in-memory task store");
            Ok(Arc::new(InMemoryTaskRepository::new()))
        }
        StoreSelection::Postgres {
            url,
            pool_size,
            apply_schema,
        } => {
            info!(pool_size, "connecting to PostgreSQL task store");
            let pool = tokio::task::spawn_blocking(move || {
                Pool::builder()
                    .max_size(pool_size)
                    .build(ConnectionManager::<PgConnection>::new(url))
            })
            .await??;
            let repository = PostgresTaskRepository::new(pool);
            if apply_schema {
                repository.ensure_schema().await?;
                info!("tasks schema applied");
            }
            Ok(Arc::new(repository))
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
