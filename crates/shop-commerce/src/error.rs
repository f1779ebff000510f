//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in catalog, search and cart operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// A required request field is absent.
    #[error("missing parameter: {0}")]
    MissingParameter(String),

    /// Product not found in the catalog.
    #[error("no such product: {0}")]
    ProductNotFound(String),

    /// Product not in the cart.
    #[error("no such product in cart: {0}")]
    ItemNotFound(String),

    /// Product already in the cart.
    #[error("product already in cart: {0}")]
    DuplicateItem(String),

    /// Backing store unreachable or a query failed.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// Uploaded file is not a supported image.
    #[error("invalid asset: {0}")]
    InvalidAsset(String),

    /// Object store operation failed.
    #[error("asset store error: {0}")]
    AssetStoreError(String),

    /// Currency mismatch.
    #[error("currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("arithmetic overflow in money calculation")]
    Overflow,

    /// Serialization error.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Validation error.
    #[error("validation error: {0}")]
    ValidationError(String),
}

impl CommerceError {
    /// Whether the caller sent something wrong, as opposed to a backend failure.
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            CommerceError::StoreUnavailable(_)
                | CommerceError::AssetStoreError(_)
                | CommerceError::Overflow
                | CommerceError::SerializationError(_)
        )
    }
}

#[cfg(feature = "storage")]
impl From<shop_db::DbError> for CommerceError {
    fn from(e: shop_db::DbError) -> Self {
        match e {
            shop_db::DbError::ConstraintViolation { key, .. } => CommerceError::DuplicateItem(key),
            other => CommerceError::StoreUnavailable(other.to_string()),
        }
    }
}

#[cfg(feature = "storage")]
impl From<shop_assets::AssetError> for CommerceError {
    fn from(e: shop_assets::AssetError) -> Self {
        CommerceError::AssetStoreError(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
