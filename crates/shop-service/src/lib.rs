//! Request boundary for shopcart.
//!
//! Each operation takes an explicit request record, validates it, runs the
//! core logic against the configured stores and returns either a typed
//! response or an [`ApiError`] carrying an HTTP status. Transports call
//! [`ShopService::handle`] with an operation name and a JSON body.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_service::{ServiceConfig, ShopService};
//!
//! let service = ShopService::new(&db, &db, &bucket, ServiceConfig::default());
//! let response = service.handle("recommend", Some(r#"{"search": "black chair", "budget": 50}"#));
//! assert!(response.is_success());
//! ```

mod config;
mod error;
mod request;
mod response;
mod service;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use request::{
    BudgetInput, ProductUrlRequest, RecommendRequest, RemoveRequest, UploadRequest, ValidUpload,
};
pub use response::{
    ApiResponse, ListResponse, ListedItem, ProductUrlResponse, RecommendedProduct,
    RemoveResponse, Subtotal, UploadResponse,
};
pub use service::{ShopService, OPERATIONS};
