//! Data-access layer for the WhatSub backend: connection pool, query executor,
//! partial-update builder and the user/subscription/reminder repositories.

pub mod config;
pub mod error;
pub mod executor;
pub mod models;
pub mod patch;
pub mod repositories;

pub use config::DbConfig;
pub use error::DbError;
pub use patch::{Patch, UpdateBuilder};

use sqlx::{PgPool, postgres::PgPoolOptions};

/// Create a PostgreSQL connection pool.
///
/// Connections are validated before every checkout, so a connection dropped by
/// the server is replaced instead of being handed to a query.
pub async fn create_pool(config: &DbConfig) -> Result<PgPool, DbError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .test_before_acquire(true)
        .connect_with(config.connect_options())
        .await
        .map_err(DbError::Connection)?;

    tracing::info!(
        "Connected to database {} on {}:{} (max {} connections)",
        config.name,
        config.host,
        config.port,
        config.max_connections
    );

    Ok(pool)
}

/// Close every connection held by the pool. Safe to call more than once.
pub async fn close_pool(pool: &PgPool) {
    if pool.is_closed() {
        return;
    }
    pool.close().await;
    tracing::info!("Database pool closed");
}

/// Round-trip a trivial statement to confirm the store is reachable.
pub async fn ping(pool: &PgPool) -> Result<(), DbError> {
    executor::run("ping", async {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    })
    .await
}

/// Run the migrations bundled from this crate's `migrations/` folder.
pub async fn migrate(pool: &PgPool) -> Result<(), DbError> {
    sqlx::migrate!().run(pool).await?;
    Ok(())
}
