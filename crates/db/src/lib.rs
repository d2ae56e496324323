//! Storage layer for the customer portal.
//!
//! Exposes the [`store::CustomerStore`] contract together with a PostgreSQL
//! implementation ([`repositories::CustomerRepo`]) and an in-memory one
//! ([`repositories::MemoryCustomerStore`]).

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod sql;
pub mod store;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
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
