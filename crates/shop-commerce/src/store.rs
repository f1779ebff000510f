//! Backing store interfaces.
//!
//! The catalog, the cart table and the object bucket are external
//! collaborators. Implementations map their own failures to
//! [`CommerceError::StoreUnavailable`] (or [`CommerceError::AssetStoreError`]
//! for the bucket) and a cart key collision to
//! [`CommerceError::DuplicateItem`].

use crate::cart::CartEntry;
use crate::catalog::{NewProduct, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// Read access to the product catalog, plus batch ingestion.
pub trait CatalogStore {
    /// Products priced in the budget's currency, at or below `budget`, whose
    /// title contains `token` compared case-insensitively. Row order is the
    /// store's natural order.
    fn find_by_budget_and_title(
        &self,
        budget: Money,
        token: &str,
    ) -> Result<Vec<Product>, CommerceError>;

    /// Look up one product.
    fn find_product(&self, id: &ProductId) -> Result<Option<Product>, CommerceError>;

    /// Insert a product, or return `None` if the store already holds it.
    fn insert_product(&self, product: NewProduct) -> Result<Option<ProductId>, CommerceError>;
}

/// The cart table, keyed by product id.
pub trait CartStore {
    /// Insert a row. A second row for the same product is a `DuplicateItem`.
    fn insert_entry(&self, entry: &CartEntry) -> Result<(), CommerceError>;

    fn find_entry(&self, id: &ProductId) -> Result<Option<CartEntry>, CommerceError>;

    /// Delete a row; returns whether one existed.
    fn delete_entry(&self, id: &ProductId) -> Result<bool, CommerceError>;

    /// All rows in insertion order.
    fn entries(&self) -> Result<Vec<CartEntry>, CommerceError>;
}

/// Object bucket holding product images.
pub trait AssetStore {
    fn put_object(&self, key: &str, bytes: &[u8]) -> Result<(), CommerceError>;

    /// Delete an object. Deleting a missing object is not an error.
    fn delete_object(&self, key: &str) -> Result<(), CommerceError>;
}
