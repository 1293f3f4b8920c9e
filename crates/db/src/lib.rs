//! PostgreSQL persistence for the edumedia platform.
//!
//! Row models and repositories for the asset tables, the three timeline
//! link tables, and the hotspot table, plus adapters implementing the
//! `edumedia-core` collaborator contracts over a connection pool.

pub mod backend;
pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Cheap connectivity check for readiness probes.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
