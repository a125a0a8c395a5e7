//! Persistence layer: pool lifecycle, row models, repositories and the
//! khasra resolver.

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod resolver;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::config::PoolSettings;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool.
///
/// One connection is opened up front so a bad configuration fails at startup.
/// Idle connections are reaped after `idle_timeout`.
pub async fn create_pool(
    options: PgConnectOptions,
    settings: &PoolSettings,
) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .idle_timeout(settings.idle_timeout)
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
