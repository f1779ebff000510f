//! In-memory stores for unit tests.

use crate::cart::CartEntry;
use crate::catalog::{Condition, NewProduct, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::store::{AssetStore, CartStore, CatalogStore};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

pub(crate) fn new_product(title: &str, cents: i64) -> NewProduct {
    let slug = title.to_lowercase().replace(' ', "-");
    NewProduct {
        title: title.to_string(),
        url: format!("https://shop.test/p/{}", slug),
        sku: String::new(),
        mpn: String::new(),
        price: Money::new(cents, Currency::USD),
        condition: Condition::New,
        available: true,
        seller: "Test Seller".to_string(),
        seller_url: "https://shop.test".to_string(),
        brand: "Test".to_string(),
    }
}

#[derive(Default)]
pub(crate) struct MemoryCatalog {
    products: Mutex<Vec<Product>>,
    unavailable: AtomicBool,
    queries: AtomicUsize,
}

impl MemoryCatalog {
    /// Insert a product and return its id.
    pub fn add(&self, title: &str, cents: i64) -> ProductId {
        self.insert_product(new_product(title, cents))
            .unwrap()
            .unwrap()
    }

    pub fn set_price(&self, id: &ProductId, cents: i64) {
        let mut products = self.products.lock().unwrap();
        let product = products.iter_mut().find(|p| &p.id == id).unwrap();
        product.price = Money::new(cents, product.price.currency);
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), CommerceError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(CommerceError::StoreUnavailable("catalog offline".into()));
        }
        Ok(())
    }
}

impl CatalogStore for MemoryCatalog {
    fn find_by_budget_and_title(
        &self,
        budget: Money,
        token: &str,
    ) -> Result<Vec<Product>, CommerceError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let products = self.products.lock().unwrap();
        Ok(products
            .iter()
            .filter(|p| {
                p.price.currency == budget.currency
                    && p.price.amount_cents <= budget.amount_cents
                    && p.title_contains(token)
            })
            .cloned()
            .collect())
    }

    fn find_product(&self, id: &ProductId) -> Result<Option<Product>, CommerceError> {
        self.check()?;
        let products = self.products.lock().unwrap();
        Ok(products.iter().find(|p| &p.id == id).cloned())
    }

    fn insert_product(&self, product: NewProduct) -> Result<Option<ProductId>, CommerceError> {
        self.check()?;
        let mut products = self.products.lock().unwrap();
        if products.iter().any(|p| p.url == product.url) {
            return Ok(None);
        }
        let id = ProductId::new((products.len() + 1).to_string());
        products.push(product.with_id(id.clone()));
        Ok(Some(id))
    }
}

#[derive(Default)]
pub(crate) struct MemoryCart {
    entries: Mutex<Vec<CartEntry>>,
    unavailable: AtomicBool,
}

impl MemoryCart {
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), CommerceError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(CommerceError::StoreUnavailable("cart offline".into()));
        }
        Ok(())
    }
}

impl CartStore for MemoryCart {
    fn insert_entry(&self, entry: &CartEntry) -> Result<(), CommerceError> {
        self.check()?;
        let mut entries = self.entries.lock().unwrap();
        if entries.iter().any(|e| e.product_id == entry.product_id) {
            return Err(CommerceError::DuplicateItem(entry.product_id.to_string()));
        }
        entries.push(entry.clone());
        Ok(())
    }

    fn find_entry(&self, id: &ProductId) -> Result<Option<CartEntry>, CommerceError> {
        self.check()?;
        let entries = self.entries.lock().unwrap();
        Ok(entries.iter().find(|e| &e.product_id == id).cloned())
    }

    fn delete_entry(&self, id: &ProductId) -> Result<bool, CommerceError> {
        self.check()?;
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| &e.product_id != id);
        Ok(entries.len() != before)
    }

    fn entries(&self) -> Result<Vec<CartEntry>, CommerceError> {
        self.check()?;
        Ok(self.entries.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub(crate) struct MemoryAssets {
    objects: Mutex<BTreeMap<String, Vec<u8>>>,
    failing: AtomicBool,
}

impl MemoryAssets {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }

    pub fn insert(&self, key: &str, bytes: &[u8]) {
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), bytes.to_vec());
    }

    fn check(&self) -> Result<(), CommerceError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(CommerceError::AssetStoreError("bucket offline".into()));
        }
        Ok(())
    }
}

impl AssetStore for MemoryAssets {
    fn put_object(&self, key: &str, bytes: &[u8]) -> Result<(), CommerceError> {
        self.check()?;
        self.insert(key, bytes);
        Ok(())
    }

    fn delete_object(&self, key: &str) -> Result<(), CommerceError> {
        self.check()?;
        self.objects.lock().unwrap().remove(key);
        Ok(())
    }
}
