//! Product catalog.

mod ingest;
mod product;

pub use ingest::{ingest, IngestReport, ProductRecord, RejectedRecord};
pub use product::{Condition, NewProduct, Product};

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::store::CatalogStore;

/// Canonical page URL of a product.
pub fn product_url<S: CatalogStore + ?Sized>(
    store: &S,
    id: &ProductId,
) -> Result<String, CommerceError> {
    store
        .find_product(id)?
        .map(|product| product.url)
        .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
}
