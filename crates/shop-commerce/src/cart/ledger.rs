//! The cart ledger.
//!
//! Adds snapshot rows from the catalog, removes rows and then cleans up the
//! thumbnail, and summarizes the cart. Image writes and deletes are best
//! effort: their outcome is reported next to the row change and never undoes
//! it.

use crate::cart::{validate_image_filename, AssetKeys, CartEntry, CartItem, CartSummary};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;
use crate::store::{AssetStore, CartStore, CatalogStore};
use serde::Serialize;

/// Result of a best-effort object store call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "reason")]
pub enum AssetOutcome {
    Done,
    Failed(String),
}

impl AssetOutcome {
    pub fn is_done(&self) -> bool {
        matches!(self, AssetOutcome::Done)
    }
}

impl From<Result<(), CommerceError>> for AssetOutcome {
    fn from(result: Result<(), CommerceError>) -> Self {
        match result {
            Ok(()) => AssetOutcome::Done,
            Err(e) => AssetOutcome::Failed(e.to_string()),
        }
    }
}

/// A removed row and what happened to its thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Removal {
    pub item: CartItem,
    pub cleanup: AssetOutcome,
}

/// An added row and what happened to the original image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Upload {
    pub item: CartItem,
    pub original: AssetOutcome,
}

/// Cart operations over borrowed stores.
pub struct CartLedger<'a> {
    catalog: &'a dyn CatalogStore,
    cart: &'a dyn CartStore,
    assets: &'a dyn AssetStore,
    keys: AssetKeys,
    currency: Currency,
}

impl<'a> CartLedger<'a> {
    pub fn new(
        catalog: &'a dyn CatalogStore,
        cart: &'a dyn CartStore,
        assets: &'a dyn AssetStore,
    ) -> Self {
        Self {
            catalog,
            cart,
            assets,
            keys: AssetKeys::default(),
            currency: Currency::default(),
        }
    }

    pub fn with_keys(mut self, keys: AssetKeys) -> Self {
        self.keys = keys;
        self
    }

    /// Currency an empty cart totals in.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn keys(&self) -> &AssetKeys {
        &self.keys
    }

    /// Add a product to the cart.
    ///
    /// The catalog is consulted before anything is written, so an unknown
    /// product leaves the cart untouched.
    pub fn add_item(&self, product_id: &ProductId) -> Result<CartItem, CommerceError> {
        let entry = self.snapshot(product_id)?;
        self.cart.insert_entry(&entry)?;
        Ok(CartItem::from_entry(entry, &self.keys))
    }

    /// Add a product and store its uploaded image.
    pub fn add_item_with_image(
        &self,
        product_id: &ProductId,
        filename: &str,
        image: &[u8],
    ) -> Result<Upload, CommerceError> {
        let entry = self.snapshot(product_id)?;
        validate_image_filename(filename)?;
        self.cart.insert_entry(&entry)?;

        let original = self
            .assets
            .put_object(&self.keys.original_key(product_id), image)
            .into();

        Ok(Upload {
            item: CartItem::from_entry(entry, &self.keys),
            original,
        })
    }

    /// Remove a product from the cart, then delete its thumbnail.
    pub fn remove_item(&self, product_id: &ProductId) -> Result<Removal, CommerceError> {
        let entry = self
            .cart
            .find_entry(product_id)?
            .ok_or_else(|| CommerceError::ItemNotFound(product_id.to_string()))?;

        if !self.cart.delete_entry(product_id)? {
            return Err(CommerceError::ItemNotFound(product_id.to_string()));
        }

        let item = CartItem::from_entry(entry, &self.keys);
        let cleanup = self.assets.delete_object(&item.thumbnail_key).into();

        Ok(Removal { item, cleanup })
    }

    /// Cart contents in insertion order.
    pub fn list_items(&self) -> Result<Vec<CartItem>, CommerceError> {
        Ok(self
            .cart
            .entries()?
            .into_iter()
            .map(|entry| CartItem::from_entry(entry, &self.keys))
            .collect())
    }

    pub fn subtotal(&self) -> Result<CartSummary, CommerceError> {
        CartSummary::from_items(&self.list_items()?, self.currency)
    }

    fn snapshot(&self, product_id: &ProductId) -> Result<CartEntry, CommerceError> {
        let product = self
            .catalog
            .find_product(product_id)?
            .ok_or_else(|| CommerceError::ProductNotFound(product_id.to_string()))?;

        Ok(CartEntry {
            product_id: product.id,
            product_name: product.title,
            price: product.price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryAssets, MemoryCart, MemoryCatalog};

    struct Fixture {
        catalog: MemoryCatalog,
        cart: MemoryCart,
        assets: MemoryAssets,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                catalog: MemoryCatalog::default(),
                cart: MemoryCart::default(),
                assets: MemoryAssets::default(),
            }
        }

        fn ledger(&self) -> CartLedger<'_> {
            CartLedger::new(&self.catalog, &self.cart, &self.assets)
        }
    }

    #[test]
    fn test_add_unknown_product_writes_nothing() {
        let fx = Fixture::new();
        let result = fx.ledger().add_item(&ProductId::new("404"));
        assert!(matches!(result, Err(CommerceError::ProductNotFound(_))));
        assert_eq!(fx.cart.len(), 0);
    }

    #[test]
    fn test_subtotal_of_two_items() {
        let fx = Fixture::new();
        let x = fx.catalog.add("Lamp X", 1000);
        let y = fx.catalog.add("Rug Y", 2550);
        let ledger = fx.ledger();

        ledger.add_item(&x).unwrap();
        ledger.add_item(&y).unwrap();

        let items = ledger.list_items().unwrap();
        assert_eq!(items[0].product_id, x);
        assert_eq!(items[1].product_id, y);

        let summary = ledger.subtotal().unwrap();
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total.display_amount(), "35.50");
    }

    #[test]
    fn test_snapshot_price_survives_catalog_change() {
        let fx = Fixture::new();
        let id = fx.catalog.add("Shelf", 1999);
        let ledger = fx.ledger();
        ledger.add_item(&id).unwrap();

        fx.catalog.set_price(&id, 4999);

        let items = ledger.list_items().unwrap();
        assert_eq!(items[0].price.amount_cents, 1999);
    }

    #[test]
    fn test_duplicate_add_surfaces_store_error() {
        let fx = Fixture::new();
        let id = fx.catalog.add("Shelf", 1999);
        let ledger = fx.ledger();
        ledger.add_item(&id).unwrap();

        assert!(matches!(
            ledger.add_item(&id),
            Err(CommerceError::DuplicateItem(_))
        ));
        assert_eq!(fx.cart.len(), 1);
    }

    #[test]
    fn test_remove_absent_item() {
        let fx = Fixture::new();
        assert!(matches!(
            fx.ledger().remove_item(&ProductId::new("1")),
            Err(CommerceError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_remove_deletes_thumbnail() {
        let fx = Fixture::new();
        let id = fx.catalog.add("Shelf", 1999);
        let ledger = fx.ledger();
        ledger.add_item(&id).unwrap();
        fx.assets.insert(&ledger.keys().thumbnail_key(&id), b"png");

        let removal = ledger.remove_item(&id).unwrap();
        assert!(removal.cleanup.is_done());
        assert!(fx.assets.keys().is_empty());
        assert!(ledger.list_items().unwrap().is_empty());
    }

    #[test]
    fn test_remove_with_failing_assets_keeps_row_deleted() {
        let fx = Fixture::new();
        let id = fx.catalog.add("Shelf", 1999);
        let ledger = fx.ledger();
        ledger.add_item(&id).unwrap();
        fx.assets.set_failing(true);

        let removal = ledger.remove_item(&id).unwrap();
        assert!(matches!(removal.cleanup, AssetOutcome::Failed(_)));
        assert_eq!(fx.cart.len(), 0);
    }

    #[test]
    fn test_upload_stores_original() {
        let fx = Fixture::new();
        let id = fx.catalog.add("Chair", 4000);
        let ledger = fx.ledger().with_keys(AssetKeys::new("app"));

        let upload = ledger.add_item_with_image(&id, "chair.jpg", b"jpeg").unwrap();
        assert!(upload.original.is_done());
        assert_eq!(upload.item.thumbnail_key, "app/cart_app/1.PNG");
        assert_eq!(fx.assets.keys(), vec!["app/1.jpg".to_string()]);
    }

    #[test]
    fn test_upload_rejects_non_jpeg_before_write() {
        let fx = Fixture::new();
        let id = fx.catalog.add("Chair", 4000);

        let result = fx.ledger().add_item_with_image(&id, "chair.gif", b"gif");
        assert!(matches!(result, Err(CommerceError::InvalidAsset(_))));
        assert_eq!(fx.cart.len(), 0);
        assert!(fx.assets.keys().is_empty());
    }

    #[test]
    fn test_upload_with_failing_assets_keeps_row() {
        let fx = Fixture::new();
        let id = fx.catalog.add("Chair", 4000);
        fx.assets.set_failing(true);

        let upload = fx.ledger().add_item_with_image(&id, "chair.jpg", b"jpeg").unwrap();
        assert!(!upload.original.is_done());
        assert_eq!(fx.cart.len(), 1);
    }

    #[test]
    fn test_cart_outage() {
        let fx = Fixture::new();
        fx.cart.set_unavailable(true);
        assert!(matches!(
            fx.ledger().list_items(),
            Err(CommerceError::StoreUnavailable(_))
        ));
    }
}
