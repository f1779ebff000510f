//! Request-level errors and their status codes.

use http::StatusCode;
use shop_commerce::CommerceError;
use thiserror::Error;

/// An error returned to the caller: a status and a short message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{status}: {message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unknown_operation(operation: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            format!("unknown operation: {}", operation),
        )
    }

    /// JSON body sent with the status.
    pub fn to_body(&self) -> serde_json::Value {
        serde_json::json!({ "error": self.message })
    }
}

impl From<CommerceError> for ApiError {
    fn from(e: CommerceError) -> Self {
        let status = match &e {
            e if e.is_client_error() => StatusCode::BAD_REQUEST,
            CommerceError::StoreUnavailable(_) | CommerceError::AssetStoreError(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::bad_request(format!("malformed request body: {}", e))
    }
}
