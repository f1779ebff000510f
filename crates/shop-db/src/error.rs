//! Database error types.

use thiserror::Error;

/// Errors that can occur when using the database.
#[derive(Error, Debug)]
pub enum DbError {
    /// Failed to open the database.
    #[error("Failed to open database: {0}")]
    OpenError(String),

    /// Failed to persist a write.
    #[error("Failed to write database: {0}")]
    WriteError(String),

    /// The tables could not be accessed.
    #[error("Database unavailable: {0}")]
    Unavailable(String),

    /// A unique key already exists.
    #[error("Duplicate key in {table}: {key}")]
    ConstraintViolation { table: &'static str, key: String },

    /// Failed to (de)serialize the snapshot.
    #[error("Serialization error: {0}")]
    SerializeError(String),
}

impl From<serde_json::Error> for DbError {
    fn from(e: serde_json::Error) -> Self {
        DbError::SerializeError(e.to_string())
    }
}
