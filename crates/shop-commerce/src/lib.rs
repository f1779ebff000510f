//! Domain types and logic for the shopcart system.
//!
//! - **Catalog**: products, feed ingestion, URL lookup
//! - **Search**: keyword and budget recommendation with paging
//! - **Cart**: the cart ledger with snapshot prices and image keys
//! - **Store**: the traits the catalog, cart table and bucket implement
//!
//! Enable the `storage` feature to use `shop_db::Db` and
//! `shop_assets::Bucket` as the stores.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_commerce::prelude::*;
//!
//! let query = SearchQuery::new("black chair", Money::new(5000, Currency::USD));
//! let ranked = recommend(&db, &query)?;
//!
//! let mut pages = ranked.pages(DEFAULT_PAGE_SIZE)?;
//! while let Some(page) = pages.next_page() {
//!     for product in &page.items {
//!         println!("{} {}", product.product_id, product.product_url);
//!     }
//! }
//!
//! let ledger = CartLedger::new(&db, &db, &bucket);
//! ledger.add_item(&ProductId::new("3"))?;
//! println!("{}", ledger.subtotal()?.display_line());
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod store;

pub mod cart;
pub mod catalog;
pub mod search;

#[cfg(feature = "storage")]
mod storage;

#[cfg(test)]
mod testing;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};
    pub use crate::store::{AssetStore, CartStore, CatalogStore};

    // Catalog
    pub use crate::catalog::{
        ingest, product_url, Condition, IngestReport, NewProduct, Product, ProductRecord,
    };

    // Cart
    pub use crate::cart::{
        AssetKeys, AssetOutcome, CartEntry, CartItem, CartLedger, CartSummary, Removal, Upload,
    };

    // Search
    pub use crate::search::{
        recommend, Page, Paginator, RankedProduct, RankedResult, SearchQuery, DEFAULT_PAGE_SIZE,
    };
}
