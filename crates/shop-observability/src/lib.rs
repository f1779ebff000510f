//! Request ids and structured logging for shopcart.
//!
//! This crate provides:
//! - `RequestId` - Unique identifier for one unit of work
//! - `StructuredLogger` - Structured logging with request context

mod logging;
mod request;

pub use logging::*;
pub use request::*;
