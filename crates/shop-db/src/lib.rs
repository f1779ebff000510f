//! Catalog and cart tables for shopcart.
//!
//! A small stand-in for the relational store the cart system talks to: a
//! `products` table queried by budget and title substring, and a `cart`
//! table keyed by product id. File-backed databases persist every write to a
//! JSON snapshot.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_db::Db;
//!
//! let db = Db::open("data/shop.json")?;
//!
//! // Products at or under $50.00 whose title mentions "chair"
//! let rows = db.products_within_budget(5000, "USD", "chair")?;
//! ```

mod db;
mod error;
mod rows;

pub use db::Db;
pub use error::DbError;
pub use rows::{CartRow, NewProductRow, ProductRow};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CartRow, Db, DbError, NewProductRow, ProductRow};
}
