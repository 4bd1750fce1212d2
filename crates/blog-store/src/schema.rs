//! Schema definitions and migration utilities.
//!
//! The posts collection is a single JSONB table; the migration is embedded
//! and idempotent.

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};

/// Embedded migration SQL for the posts collection (001_posts.sql).
pub const POSTS_MIGRATION: &str = include_str!("../../../migrations/001_posts.sql");

/// Run all pending migrations against the database.
///
/// This function is idempotent - it can be run multiple times safely.
///
/// # Errors
///
/// Returns an error if the migration fails to execute.
pub async fn run_migrations(pool: &PgPool) -> StoreResult<()> {
    tracing::info!("Running database migrations...");

    tracing::debug!("Running posts migration (001_posts.sql)...");
    sqlx::raw_sql(POSTS_MIGRATION)
        .execute(pool)
        .await
        .map_err(|e| StoreError::MigrationError(format!("Posts migration failed: {}", e)))?;

    tracing::info!("Migrations completed successfully");
    Ok(())
}
