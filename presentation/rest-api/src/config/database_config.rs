use std::env;
use std::time::Duration;

use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;

use super::env::parse_or;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Connected pool plus the per-operation limit repositories must honour.
pub struct Database {
    pub pool: PgPool,
    pub operation_timeout: Duration,
}

/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - DATABASE_TIMEOUT_SECS: per-operation store timeout (default: 10)
pub fn database_config_from_env() -> anyhow::Result<DatabaseConfig> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let mut config = DatabaseConfig::new(db_url);
    config.max_connections = parse_or("DATABASE_MAX_CONNECTIONS", config.max_connections);
    let timeout = Duration::from_secs(parse_or(
        "DATABASE_TIMEOUT_SECS",
        config.operation_timeout.as_secs(),
    ));
    config.operation_timeout = timeout;
    config.acquire_timeout = timeout;
    Ok(config)
}

/// Connects to PostgreSQL and applies pending migrations
///
/// Environment variables:
/// - MIGRATIONS_PATH: migrations directory (default: "infrastructure/persistence/migrations")
pub async fn init_database() -> anyhow::Result<Database> {
    let config = database_config_from_env()?;
    let pool = create_postgres_pool(&config)
        .await
        .context("Could not connect to PostgreSQL")?;

    let migrations_path =
        env::var("MIGRATIONS_PATH").unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());
    run_migrations(&pool, &migrations_path)
        .await
        .with_context(|| format!("Could not apply migrations from {migrations_path}"))?;
    tracing::info!(path = %migrations_path, "Database migrations applied");

    Ok(Database {
        pool,
        operation_timeout: config.operation_timeout,
    })
}
