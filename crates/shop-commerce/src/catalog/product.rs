//! Product types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Physical condition of a listed product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    #[default]
    New,
    Used,
    Refurbished,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::Used => "used",
            Condition::Refurbished => "refurbished",
        }
    }

    /// Parse a condition name. Accepts feed spellings such as `NewCondition`.
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        match lower.strip_suffix("condition").unwrap_or(&lower).trim() {
            "new" => Some(Condition::New),
            "used" => Some(Condition::Used),
            "refurbished" => Some(Condition::Refurbished),
            _ => None,
        }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Listing title; searched by keyword.
    pub title: String,
    /// Canonical product page URL.
    pub url: String,
    /// Stock keeping unit.
    pub sku: String,
    /// Manufacturer part number.
    pub mpn: String,
    /// Listed price; never negative.
    pub price: Money,
    pub condition: Condition,
    /// Whether the seller lists it as in stock.
    pub available: bool,
    pub seller: String,
    pub seller_url: String,
    pub brand: String,
}

/// A product that has not been assigned an id yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub url: String,
    pub sku: String,
    pub mpn: String,
    pub price: Money,
    pub condition: Condition,
    pub available: bool,
    pub seller: String,
    pub seller_url: String,
    pub brand: String,
}

impl NewProduct {
    /// Attach the id assigned by the store.
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            title: self.title,
            url: self.url,
            sku: self.sku,
            mpn: self.mpn,
            price: self.price,
            condition: self.condition,
            available: self.available,
            seller: self.seller,
            seller_url: self.seller_url,
            brand: self.brand,
        }
    }
}

impl Product {
    /// Case-insensitive title substring match.
    pub fn title_contains(&self, token: &str) -> bool {
        self.title.to_lowercase().contains(&token.to_lowercase())
    }
}
