//! Table row types.
//!
//! Prices are stored in minor currency units so budget comparisons are exact.

use serde::{Deserialize, Serialize};

/// A row of the `products` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRow {
    /// Auto-increment key, rendered as a decimal string.
    pub product_id: String,
    pub product_title: String,
    pub product_url: String,
    pub sku: String,
    pub mpn: String,
    /// ISO currency code (e.g. "USD").
    pub currency: String,
    /// Price in minor units.
    pub price_minor: i64,
    /// One of "new", "used", "refurbished".
    pub product_condition: String,
    pub available: bool,
    pub seller: String,
    pub seller_url: String,
    pub brand: String,
}

/// Column values for a product insert. The key is assigned by the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProductRow {
    pub product_title: String,
    pub product_url: String,
    pub sku: String,
    pub mpn: String,
    pub currency: String,
    pub price_minor: i64,
    pub product_condition: String,
    pub available: bool,
    pub seller: String,
    pub seller_url: String,
    pub brand: String,
}

impl NewProductRow {
    pub(crate) fn with_id(self, product_id: String) -> ProductRow {
        ProductRow {
            product_id,
            product_title: self.product_title,
            product_url: self.product_url,
            sku: self.sku,
            mpn: self.mpn,
            currency: self.currency,
            price_minor: self.price_minor,
            product_condition: self.product_condition,
            available: self.available,
            seller: self.seller,
            seller_url: self.seller_url,
            brand: self.brand,
        }
    }
}

/// A row of the `cart` table, keyed by `product_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartRow {
    pub product_id: String,
    pub product_name: String,
    pub price_minor: i64,
    pub currency: String,
}

/// On-disk layout of all tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct Tables {
    #[serde(default)]
    pub next_product_id: u64,
    #[serde(default)]
    pub products: Vec<ProductRow>,
    #[serde(default)]
    pub cart: Vec<CartRow>,
}
