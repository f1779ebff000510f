//! Asset store error types.

use thiserror::Error;

/// Errors that can occur when using the bucket.
#[derive(Error, Debug)]
pub enum AssetError {
    /// Failed to open the bucket.
    #[error("Failed to open bucket: {0}")]
    OpenError(String),

    /// Key is empty, absolute, or escapes the bucket root.
    #[error("Invalid object key: {0}")]
    InvalidKey(String),

    /// Failed to perform a bucket operation.
    #[error("Bucket operation failed on {key}: {message}")]
    StoreError { key: String, message: String },

    /// Payload is not valid base64.
    #[error("Invalid payload encoding: {0}")]
    DecodeError(#[from] base64::DecodeError),
}
