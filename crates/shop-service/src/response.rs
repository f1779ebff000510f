//! Response records.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use shop_commerce::cart::{AssetOutcome, CartItem, CartSummary, Removal};
use shop_commerce::ProductId;

/// One recommendation, in ranked order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedProduct {
    pub product_id: ProductId,
    pub product_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUrlResponse {
    pub product_id: ProductId,
    pub product_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub product_id: ProductId,
    pub product_url: String,
    /// Whether the original image reached the bucket.
    pub image_stored: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveResponse {
    pub product_id: ProductId,
    /// Whether the thumbnail delete succeeded.
    pub thumbnail_removed: bool,
}

impl From<&Removal> for RemoveResponse {
    fn from(removal: &Removal) -> Self {
        Self {
            product_id: removal.item.product_id.clone(),
            thumbnail_removed: matches!(removal.cleanup, AssetOutcome::Done),
        }
    }
}

/// A cart row as listed. Prices are decimal text such as `"25.50"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListedItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub price: String,
}

impl From<&CartItem> for ListedItem {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id.clone(),
            product_name: item.product_name.clone(),
            price: item.price.display_amount(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtotal {
    pub item_count: usize,
    pub total: String,
}

impl From<&CartSummary> for Subtotal {
    fn from(summary: &CartSummary) -> Self {
        Self {
            item_count: summary.item_count,
            total: summary.total.display_amount(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse {
    pub items: Vec<ListedItem>,
    pub subtotal: Subtotal,
}

/// A status and JSON body, ready for whatever transport carries it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: serde_json::Value,
}

impl ApiResponse {
    pub fn ok(body: serde_json::Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_commerce::cart::{AssetKeys, CartEntry};
    use shop_commerce::{Currency, Money};

    #[test]
    fn test_listed_item_price_text() {
        let item = CartItem::from_entry(
            CartEntry {
                product_id: ProductId::new("3"),
                product_name: "Rug".into(),
                price: Money::new(2550, Currency::USD),
            },
            &AssetKeys::default(),
        );
        let listed = ListedItem::from(&item);
        assert_eq!(
            serde_json::to_value(listed).unwrap(),
            serde_json::json!({"product_id": 3, "product_name": "Rug", "price": "25.50"})
        );
    }
}
