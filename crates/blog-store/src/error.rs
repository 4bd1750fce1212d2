//! Error types for the storage layer.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database connection error.
    #[error("database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    /// Migration error.
    #[error("migration error: {0}")]
    MigrationError(String),

    /// Skip or limit is negative.
    #[error("invalid window: skip {skip}, limit {limit}")]
    InvalidWindow { skip: i64, limit: i64 },

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}
