//! Typed errors for the table store layer.
//!
//! Uses `thiserror` so domain code can match on the failure kind instead of
//! inspecting driver messages.

use thiserror::Error;

/// Errors raised by a table store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A row with the same key already exists
    #[error("{entity} already exists: {key}")]
    Conflict { entity: &'static str, key: String },

    /// The row references a parent that does not exist
    #[error("{entity} not found for key: {key}")]
    MissingParent { entity: &'static str, key: String },

    /// The store could not be reached (pool exhausted, closed, or offline)
    #[error("store unavailable")]
    Unavailable,

    /// Any other driver or query failure
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => StoreError::Unavailable,
            other => StoreError::Database(other),
        }
    }
}

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
