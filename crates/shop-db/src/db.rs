//! Database handle and table operations.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::rows::{CartRow, NewProductRow, ProductRow, Tables};
use crate::DbError;

/// Catalog and cart tables.
///
/// Reads take a shared lock and run concurrently; writes are serialized and,
/// for file-backed databases, flushed to the snapshot before returning.
pub struct Db {
    path: Option<PathBuf>,
    tables: RwLock<Tables>,
}

impl Db {
    /// Open a file-backed database, creating an empty one if the file is missing.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let db = Db::open("data/shop.json")?;
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DbError> {
        let path = path.as_ref().to_path_buf();
        let tables = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| DbError::OpenError(format!("{}: {}", path.display(), e)))?;
            serde_json::from_str(&content)
                .map_err(|e| DbError::OpenError(format!("{}: {}", path.display(), e)))?
        } else {
            Tables::default()
        };

        Ok(Self {
            path: Some(path),
            tables: RwLock::new(tables),
        })
    }

    /// Open a database that lives only in memory.
    pub fn open_in_memory() -> Self {
        Self {
            path: None,
            tables: RwLock::new(Tables::default()),
        }
    }

    /// Insert a product unless one with the same URL already exists.
    ///
    /// Returns the assigned key, or `None` when the insert was ignored.
    pub fn insert_product(&self, row: NewProductRow) -> Result<Option<String>, DbError> {
        let mut tables = self.write()?;

        if tables
            .products
            .iter()
            .any(|p| p.product_url == row.product_url)
        {
            return Ok(None);
        }

        tables.next_product_id += 1;
        let id = tables.next_product_id.to_string();
        tables.products.push(row.with_id(id.clone()));
        self.flush(&tables)?;
        Ok(Some(id))
    }

    /// Products priced in `currency` at or below `budget_minor` whose
    /// lower-cased title contains `needle`, in key order.
    pub fn products_within_budget(
        &self,
        budget_minor: i64,
        currency: &str,
        needle: &str,
    ) -> Result<Vec<ProductRow>, DbError> {
        let needle = needle.to_lowercase();
        let tables = self.read()?;
        Ok(tables
            .products
            .iter()
            .filter(|p| p.currency == currency && p.price_minor <= budget_minor)
            .filter(|p| p.product_title.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    /// Look up a product by key.
    pub fn find_product(&self, product_id: &str) -> Result<Option<ProductRow>, DbError> {
        let tables = self.read()?;
        Ok(tables
            .products
            .iter()
            .find(|p| p.product_id == product_id)
            .cloned())
    }

    /// Number of rows in the products table.
    pub fn product_count(&self) -> Result<usize, DbError> {
        Ok(self.read()?.products.len())
    }

    /// Insert a cart row. Fails if the product is already in the cart.
    pub fn insert_cart_row(&self, row: CartRow) -> Result<(), DbError> {
        let mut tables = self.write()?;

        if tables.cart.iter().any(|c| c.product_id == row.product_id) {
            return Err(DbError::ConstraintViolation {
                table: "cart",
                key: row.product_id,
            });
        }

        tables.cart.push(row);
        self.flush(&tables)
    }

    /// Look up a cart row by product key.
    pub fn find_cart_row(&self, product_id: &str) -> Result<Option<CartRow>, DbError> {
        let tables = self.read()?;
        Ok(tables
            .cart
            .iter()
            .find(|c| c.product_id == product_id)
            .cloned())
    }

    /// Delete a cart row. Returns whether a row was removed.
    pub fn delete_cart_row(&self, product_id: &str) -> Result<bool, DbError> {
        let mut tables = self.write()?;
        let len_before = tables.cart.len();
        tables.cart.retain(|c| c.product_id != product_id);
        let removed = tables.cart.len() < len_before;
        if removed {
            self.flush(&tables)?;
        }
        Ok(removed)
    }

    /// All cart rows in insertion order.
    pub fn cart_rows(&self) -> Result<Vec<CartRow>, DbError> {
        Ok(self.read()?.cart.clone())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, DbError> {
        self.tables
            .read()
            .map_err(|_| DbError::Unavailable("table lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, DbError> {
        self.tables
            .write()
            .map_err(|_| DbError::Unavailable("table lock poisoned".to_string()))
    }

    // Write to a sibling temp file, then rename over the snapshot.
    fn flush(&self, tables: &Tables) -> Result<(), DbError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| DbError::WriteError(e.to_string()))?;
            }
        }

        let content = serde_json::to_string_pretty(tables)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(|e| DbError::WriteError(e.to_string()))?;
        fs::rename(&tmp, path).map_err(|e| DbError::WriteError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(title: &str, url: &str, price_minor: i64) -> NewProductRow {
        NewProductRow {
            product_title: title.to_string(),
            product_url: url.to_string(),
            sku: "sku".to_string(),
            mpn: "mpn".to_string(),
            currency: "USD".to_string(),
            price_minor,
            product_condition: "new".to_string(),
            available: true,
            seller: "IKEA".to_string(),
            seller_url: "https://www.ikea.com".to_string(),
            brand: "IKEA".to_string(),
        }
    }

    fn cart_row(id: &str, price_minor: i64) -> CartRow {
        CartRow {
            product_id: id.to_string(),
            product_name: format!("Product {}", id),
            price_minor,
            currency: "USD".to_string(),
        }
    }

    #[test]
    fn test_insert_assigns_sequential_keys() {
        let db = Db::open_in_memory();
        let a = db.insert_product(product("Chair", "https://x/a", 4000)).unwrap();
        let b = db.insert_product(product("Desk", "https://x/b", 9000)).unwrap();
        assert_eq!(a.as_deref(), Some("1"));
        assert_eq!(b.as_deref(), Some("2"));
    }

    #[test]
    fn test_insert_ignores_duplicate_url() {
        let db = Db::open_in_memory();
        db.insert_product(product("Chair", "https://x/a", 4000)).unwrap();
        let again = db.insert_product(product("Chair v2", "https://x/a", 5000)).unwrap();
        assert_eq!(again, None);
        assert_eq!(db.product_count().unwrap(), 1);
    }

    #[test]
    fn test_budget_and_title_filter() {
        let db = Db::open_in_memory();
        db.insert_product(product("Black Office Chair", "https://x/a", 4000)).unwrap();
        db.insert_product(product("White office chair", "https://x/b", 9000)).unwrap();
        db.insert_product(product("Black desk", "https://x/c", 4000)).unwrap();

        let rows = db.products_within_budget(5000, "USD", "chair").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].product_id, "1");

        let rows = db.products_within_budget(5000, "USD", "BLACK").unwrap();
        let ids: Vec<&str> = rows.iter().map(|r| r.product_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_budget_is_inclusive() {
        let db = Db::open_in_memory();
        db.insert_product(product("Lamp", "https://x/a", 5000)).unwrap();
        assert_eq!(db.products_within_budget(5000, "USD", "lamp").unwrap().len(), 1);
        assert!(db.products_within_budget(4999, "USD", "lamp").unwrap().is_empty());
    }

    #[test]
    fn test_budget_ignores_other_currencies() {
        let db = Db::open_in_memory();
        db.insert_product(product("Lamp", "https://x/a", 3000)).unwrap();
        let mut yen = product("Lamp", "https://x/b", 3000);
        yen.currency = "JPY".to_string();
        db.insert_product(yen).unwrap();

        let rows = db.products_within_budget(5000, "USD", "lamp").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].product_id, "1");

        let rows = db.products_within_budget(5000, "JPY", "lamp").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].product_id, "2");
    }

    #[test]
    fn test_cart_unique_key() {
        let db = Db::open_in_memory();
        db.insert_cart_row(cart_row("1", 1000)).unwrap();
        let err = db.insert_cart_row(cart_row("1", 1000)).unwrap_err();
        assert!(matches!(err, DbError::ConstraintViolation { table: "cart", .. }));
    }

    #[test]
    fn test_cart_delete() {
        let db = Db::open_in_memory();
        db.insert_cart_row(cart_row("1", 1000)).unwrap();
        db.insert_cart_row(cart_row("2", 2550)).unwrap();

        assert!(db.delete_cart_row("1").unwrap());
        assert!(!db.delete_cart_row("1").unwrap());

        let rows = db.cart_rows().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].product_id, "2");
    }

    #[test]
    fn test_snapshot_round_trip() {
        let dir = std::env::temp_dir().join(format!("shop-db-test-{}", std::process::id()));
        let path = dir.join("shop.json");
        let _ = fs::remove_dir_all(&dir);

        {
            let db = Db::open(&path).unwrap();
            db.insert_product(product("Chair", "https://x/a", 4000)).unwrap();
            db.insert_cart_row(cart_row("1", 4000)).unwrap();
        }

        let db = Db::open(&path).unwrap();
        assert_eq!(db.product_count().unwrap(), 1);
        assert_eq!(db.cart_rows().unwrap().len(), 1);
        let next = db.insert_product(product("Desk", "https://x/b", 9000)).unwrap();
        assert_eq!(next.as_deref(), Some("2"));

        let _ = fs::remove_dir_all(&dir);
    }
}
