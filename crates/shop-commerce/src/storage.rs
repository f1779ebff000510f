//! Store implementations backed by `shop-db` and `shop-assets`.

use crate::cart::CartEntry;
use crate::catalog::{Condition, NewProduct, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::store::{AssetStore, CartStore, CatalogStore};
use shop_assets::Bucket;
use shop_db::{CartRow, Db, NewProductRow, ProductRow};

fn parse_currency(code: &str) -> Result<Currency, CommerceError> {
    Currency::from_code(code)
        .ok_or_else(|| CommerceError::SerializationError(format!("unknown currency in row: {}", code)))
}

fn product_from_row(row: ProductRow) -> Result<Product, CommerceError> {
    let currency = parse_currency(&row.currency)?;
    let condition = Condition::from_str(&row.product_condition).ok_or_else(|| {
        CommerceError::SerializationError(format!(
            "unknown condition in row: {}",
            row.product_condition
        ))
    })?;

    Ok(Product {
        id: ProductId::new(row.product_id),
        title: row.product_title,
        url: row.product_url,
        sku: row.sku,
        mpn: row.mpn,
        price: Money::new(row.price_minor, currency),
        condition,
        available: row.available,
        seller: row.seller,
        seller_url: row.seller_url,
        brand: row.brand,
    })
}

fn row_from_product(product: NewProduct) -> NewProductRow {
    NewProductRow {
        product_title: product.title,
        product_url: product.url,
        sku: product.sku,
        mpn: product.mpn,
        currency: product.price.currency.code().to_string(),
        price_minor: product.price.amount_cents,
        product_condition: product.condition.as_str().to_string(),
        available: product.available,
        seller: product.seller,
        seller_url: product.seller_url,
        brand: product.brand,
    }
}

fn entry_from_row(row: CartRow) -> Result<CartEntry, CommerceError> {
    Ok(CartEntry {
        price: Money::new(row.price_minor, parse_currency(&row.currency)?),
        product_id: ProductId::new(row.product_id),
        product_name: row.product_name,
    })
}

impl CatalogStore for Db {
    fn find_by_budget_and_title(
        &self,
        budget: Money,
        token: &str,
    ) -> Result<Vec<Product>, CommerceError> {
        self.products_within_budget(budget.amount_cents, budget.currency.code(), token)?
            .into_iter()
            .map(product_from_row)
            .collect()
    }

    fn find_product(&self, id: &ProductId) -> Result<Option<Product>, CommerceError> {
        Db::find_product(self, id.as_str())?
            .map(product_from_row)
            .transpose()
    }

    fn insert_product(&self, product: NewProduct) -> Result<Option<ProductId>, CommerceError> {
        Ok(Db::insert_product(self, row_from_product(product))?.map(ProductId::new))
    }
}

impl CartStore for Db {
    fn insert_entry(&self, entry: &CartEntry) -> Result<(), CommerceError> {
        self.insert_cart_row(CartRow {
            product_id: entry.product_id.to_string(),
            product_name: entry.product_name.clone(),
            price_minor: entry.price.amount_cents,
            currency: entry.price.currency.code().to_string(),
        })?;
        Ok(())
    }

    fn find_entry(&self, id: &ProductId) -> Result<Option<CartEntry>, CommerceError> {
        self.find_cart_row(id.as_str())?
            .map(entry_from_row)
            .transpose()
    }

    fn delete_entry(&self, id: &ProductId) -> Result<bool, CommerceError> {
        Ok(self.delete_cart_row(id.as_str())?)
    }

    fn entries(&self) -> Result<Vec<CartEntry>, CommerceError> {
        self.cart_rows()?.into_iter().map(entry_from_row).collect()
    }
}

impl AssetStore for Bucket {
    fn put_object(&self, key: &str, bytes: &[u8]) -> Result<(), CommerceError> {
        Ok(self.put(key, bytes)?)
    }

    fn delete_object(&self, key: &str) -> Result<(), CommerceError> {
        Ok(self.delete(key)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartLedger;
    use crate::search::{recommend, SearchQuery};
    use crate::testing::new_product;

    /// A bucket in a scratch directory, removed when dropped.
    struct TempBucket {
        dir: std::path::PathBuf,
        bucket: Bucket,
    }

    impl std::ops::Deref for TempBucket {
        type Target = Bucket;

        fn deref(&self) -> &Bucket {
            &self.bucket
        }
    }

    impl Drop for TempBucket {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.dir);
        }
    }

    fn temp_bucket(name: &str) -> TempBucket {
        let dir = std::env::temp_dir().join(format!(
            "shop-commerce-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        let bucket = Bucket::open(&dir).unwrap();
        TempBucket { dir, bucket }
    }

    #[test]
    fn test_db_catalog_round_trip() {
        let db = Db::open_in_memory();
        let id = CatalogStore::insert_product(&db, new_product("Black Chair", 4000))
            .unwrap()
            .unwrap();

        let product = CatalogStore::find_product(&db, &id).unwrap().unwrap();
        assert_eq!(product.title, "Black Chair");
        assert_eq!(product.price, Money::new(4000, Currency::USD));
        assert_eq!(product.condition, Condition::New);

        assert!(CatalogStore::insert_product(&db, new_product("Black Chair", 4000))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_db_recommend() {
        let db = Db::open_in_memory();
        for (title, cents) in [("Black Chair", 4000), ("Black Chair Deluxe", 6000), ("Chair", 3000)] {
            CatalogStore::insert_product(&db, new_product(title, cents)).unwrap();
        }

        let result = recommend(
            &db,
            &SearchQuery::new("black chair", Money::new(5000, Currency::USD)),
        )
        .unwrap();
        let ids: Vec<&str> = result.products().iter().map(|p| p.product_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_db_cart_duplicate() {
        let db = Db::open_in_memory();
        let bucket = temp_bucket("dup");
        let id = CatalogStore::insert_product(&db, new_product("Lamp", 1500))
            .unwrap()
            .unwrap();
        let ledger = CartLedger::new(&db, &db, &*bucket);

        ledger.add_item(&id).unwrap();
        assert!(matches!(
            ledger.add_item(&id),
            Err(CommerceError::DuplicateItem(_))
        ));
    }

    #[test]
    fn test_bucket_cleanup_on_remove() {
        let db = Db::open_in_memory();
        let bucket = temp_bucket("remove");
        let id = CatalogStore::insert_product(&db, new_product("Lamp", 1500))
            .unwrap()
            .unwrap();
        let ledger = CartLedger::new(&db, &db, &*bucket);

        let upload = ledger.add_item_with_image(&id, "lamp.jpg", b"jpeg").unwrap();
        assert!(upload.original.is_done());
        bucket.put(&upload.item.thumbnail_key, b"png").unwrap();

        let removal = ledger.remove_item(&id).unwrap();
        assert!(removal.cleanup.is_done());
        assert!(!bucket.exists(&removal.item.thumbnail_key).unwrap());
        assert!(bucket.exists("shopcart/1.jpg").unwrap());
    }

    #[test]
    fn test_temp_bucket_removed_on_drop() {
        let bucket = temp_bucket("drop");
        bucket.put("shopcart/1.jpg", b"jpeg").unwrap();
        let dir = bucket.dir.clone();
        assert!(dir.exists());

        drop(bucket);
        assert!(!dir.exists());
    }

    #[test]
    fn test_db_recommend_skips_other_currency() {
        let db = Db::open_in_memory();
        CatalogStore::insert_product(&db, new_product("Chair", 3000)).unwrap();
        let mut euro = new_product("Euro Chair", 3000);
        euro.price = Money::new(3000, Currency::EUR);
        CatalogStore::insert_product(&db, euro).unwrap();

        let result = recommend(
            &db,
            &SearchQuery::new("chair", Money::new(5000, Currency::USD)),
        )
        .unwrap();
        let ids: Vec<&str> = result.products().iter().map(|p| p.product_id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
    }
}
