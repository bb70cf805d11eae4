use std::future::Future;
use std::{path::Path, time::Duration};

use business::domain::errors::RepositoryError;
use sqlx::{PgPool, postgres::PgPoolOptions};
use thiserror::Error;

/// Upper bound on a single store operation unless configured otherwise.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(10);

const UNIQUE_VIOLATION: &str = "23505";
const CHECK_VIOLATION: &str = "23514";
const NUMERIC_OUT_OF_RANGE: &str = "22003";

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub operation_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: DEFAULT_OPERATION_TIMEOUT,
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Could not connect to the database");
            DatabaseError::ConnectionError
        })?;

    Ok(pool)
}

/// Runs database migrations from the specified directory
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);

    if !path.exists() {
        tracing::error!(path = migrations_path, "Migrations directory not found");
        return Err(DatabaseError::MigrationError);
    }

    sqlx::migrate::Migrator::new(path)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Could not load migrations");
            DatabaseError::MigrationError
        })?
        .run(pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Migrations failed");
            DatabaseError::MigrationError
        })
}

/// Runs one store operation, failing with `Timeout` once `limit` elapses.
pub(crate) async fn bounded<T, F>(limit: Duration, operation: F) -> Result<T, RepositoryError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(limit, operation).await {
        Ok(result) => result.map_err(map_sqlx_error),
        Err(_) => {
            tracing::error!(timeout_ms = limit.as_millis() as u64, "Store operation timed out");
            Err(RepositoryError::Timeout)
        }
    }
}

/// Translates driver errors into the repository vocabulary. Constraint
/// failures are caller problems; everything else is a store failure.
pub(crate) fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_error) = &error {
        match db_error.code().as_deref() {
            Some(UNIQUE_VIOLATION) => return RepositoryError::Duplicated,
            Some(CHECK_VIOLATION) | Some(NUMERIC_OUT_OF_RANGE) => {
                return RepositoryError::ConstraintViolation;
            }
            _ => {}
        }
    }
    if matches!(error, sqlx::Error::PoolTimedOut) {
        tracing::error!("Timed out waiting for a database connection");
        return RepositoryError::Timeout;
    }
    tracing::error!(error = %error, "Database operation failed");
    RepositoryError::DatabaseError
}
