//! Cart rows and summaries.

use crate::cart::AssetKeys;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A row in the cart table.
///
/// Name and price are copied from the catalog when the row is written and
/// never follow later catalog changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub product_id: ProductId,
    pub product_name: String,
    pub price: Money,
}

/// A cart row together with the key of its thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub price: Money,
    pub thumbnail_key: String,
}

impl CartItem {
    pub fn from_entry(entry: CartEntry, keys: &AssetKeys) -> Self {
        let thumbnail_key = keys.thumbnail_key(&entry.product_id);
        Self {
            product_id: entry.product_id,
            product_name: entry.product_name,
            price: entry.price,
            thumbnail_key,
        }
    }
}

/// Item count and total of a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    pub item_count: usize,
    pub total: Money,
}

impl CartSummary {
    /// Sum item prices. An empty cart totals zero in `currency`.
    pub fn from_items(items: &[CartItem], currency: Currency) -> Result<Self, CommerceError> {
        let mut total = Money::zero(currency);
        for item in items {
            if item.price.currency != currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: item.price.currency.code().to_string(),
                });
            }
            total = total.try_add(&item.price).ok_or(CommerceError::Overflow)?;
        }

        Ok(Self {
            item_count: items.len(),
            total,
        })
    }

    /// The one-line form shown under a cart listing.
    pub fn display_line(&self) -> String {
        format!(
            "SUBTOTAL ({} items): {}",
            self.item_count,
            self.total.display()
        )
    }
}
