//! Shared test helpers for `PostgreSQL` integration tests.

use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use std::sync::atomic::{AtomicUsize, Ordering};
use tasktrack::task::adapters::postgres::{PostgresTaskRepository, TaskPgPool};

/// Environment variable naming the server used by these tests.
pub const TEST_DATABASE_URL_ENV: &str = "TASKTRACK_TEST_DATABASE_URL";

static NEXT_SCHEMA: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
struct SearchPath(String);

impl CustomizeConnection<PgConnection, diesel::r2d2::Error> for SearchPath {
    fn on_acquire(&self, connection: &mut PgConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .batch_execute(&format!("SET search_path TO {}", self.0))
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Validates the configured server URL.
///
/// # Errors
///
/// Returns an error naming [`TEST_DATABASE_URL_ENV`] when the value is
/// missing or blank.
pub fn database_url_from(value: Option<String>) -> eyre::Result<String> {
    match value {
        Some(url) if !url.trim().is_empty() => Ok(url),
        _ => Err(eyre::eyre!(
            "{TEST_DATABASE_URL_ENV} must name a PostgreSQL server to run these tests"
        )),
    }
}

/// A schema private to one test, with the tasks table applied.
pub struct TestDatabase {
    pool: TaskPgPool,
    schema: String,
}

impl TestDatabase {
    /// Connects to the test server and prepares a fresh schema.
    ///
    /// # Errors
    ///
    /// Returns an error if [`TEST_DATABASE_URL_ENV`] is unset, the server is
    /// unreachable, or the schema cannot be created.
    pub async fn connect() -> eyre::Result<Self> {
        let url = database_url_from(std::env::var(TEST_DATABASE_URL_ENV).ok())?;
        let schema = format!(
            "tasktrack_test_{}_{}",
            std::process::id(),
            NEXT_SCHEMA.fetch_add(1, Ordering::Relaxed)
        );
        let pool = tokio::task::spawn_blocking({
            let search_path = schema.clone();
            move || -> eyre::Result<TaskPgPool> {
                let mut admin = Pool::builder()
                    .max_size(1)
                    .build(ConnectionManager::<PgConnection>::new(url.clone()))?
                    .get()?;
                admin.batch_execute(&format!("CREATE SCHEMA {search_path}"))?;
                Ok(Pool::builder()
                    .max_size(2)
                    .connection_customizer(Box::new(SearchPath(search_path)))
                    .build(ConnectionManager::<PgConnection>::new(url))?)
            }
        })
        .await??;

        let database = Self { pool, schema };
        database.repository().ensure_schema().await?;
        Ok(database)
    }

    /// Repository over this test's schema.
    #[must_use]
    pub fn repository(&self) -> PostgresTaskRepository {
        PostgresTaskRepository::new(self.pool.clone())
    }

    /// Drops the schema and everything in it.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be dropped.
    pub async fn drop_schema(self) -> eyre::Result<()> {
        let Self { pool, schema } = self;
        tokio::task::spawn_blocking(move || -> eyre::Result<()> {
            pool.get()?
                .batch_execute(&format!("DROP SCHEMA {schema} CASCADE"))?;
            Ok(())
        })
        .await?
    }
}
