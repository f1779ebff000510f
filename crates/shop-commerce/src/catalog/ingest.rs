//! Batch catalog ingestion from product feed records.

use crate::catalog::{Condition, NewProduct};
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use crate::store::CatalogStore;
use serde::{Deserialize, Serialize};

/// One product as it appears in the feed file.
///
/// `product_price` may be a JSON number or a numeric string, and
/// `availability` a boolean or a stock phrase such as `"InStock"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_title: String,
    pub product_url: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub mpn: String,
    #[serde(default)]
    pub currency: Option<String>,
    pub product_price: serde_json::Value,
    #[serde(default)]
    pub product_condition: Option<String>,
    #[serde(default)]
    pub availability: serde_json::Value,
    #[serde(default)]
    pub seller: String,
    #[serde(default)]
    pub seller_url: String,
    #[serde(default)]
    pub brand: String,
}

impl ProductRecord {
    /// Validate the record into an insertable product.
    ///
    /// A missing currency falls back to `default_currency`; a missing
    /// condition means new.
    pub fn into_product(self, default_currency: Currency) -> Result<NewProduct, CommerceError> {
        let currency = match self.currency.as_deref() {
            None | Some("") => default_currency,
            Some(code) => Currency::from_code(code).ok_or_else(|| {
                CommerceError::ValidationError(format!("unknown currency: {}", code))
            })?,
        };

        let price_text = match &self.product_price {
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::String(s) => s.clone(),
            other => {
                return Err(CommerceError::ValidationError(format!(
                    "price is not a number: {}",
                    other
                )))
            }
        };
        let price = Money::parse_decimal(&price_text, currency).ok_or_else(|| {
            CommerceError::ValidationError(format!("invalid price: {}", price_text))
        })?;
        if price.is_negative() {
            return Err(CommerceError::ValidationError(format!(
                "negative price: {}",
                price_text
            )));
        }

        let condition = match self.product_condition.as_deref() {
            None | Some("") => Condition::New,
            Some(c) => Condition::from_str(c).ok_or_else(|| {
                CommerceError::ValidationError(format!("unknown condition: {}", c))
            })?,
        };

        Ok(NewProduct {
            title: self.product_title,
            url: self.product_url,
            sku: self.sku,
            mpn: self.mpn,
            price,
            condition,
            available: parse_availability(&self.availability),
            seller: self.seller,
            seller_url: self.seller_url,
            brand: self.brand,
        })
    }
}

fn parse_availability(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_i64().is_some_and(|n| n != 0),
        serde_json::Value::String(s) => {
            let s: String = s
                .to_lowercase()
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect();
            matches!(s.as_str(), "instock" | "true" | "yes" | "available" | "1")
        }
        _ => false,
    }
}

/// A record that could not be loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedRecord {
    pub title: String,
    pub reason: String,
}

/// Outcome of a batch load.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IngestReport {
    /// Products added to the catalog.
    pub inserted: usize,
    /// Records skipped because the catalog already held them.
    pub ignored: usize,
    /// Records that failed validation or insertion.
    pub rejected: Vec<RejectedRecord>,
}

/// Load feed records into the catalog.
///
/// Bad records are reported and skipped; the batch continues. A store
/// outage aborts the batch.
pub fn ingest<S: CatalogStore + ?Sized>(
    store: &S,
    records: Vec<ProductRecord>,
    default_currency: Currency,
) -> Result<IngestReport, CommerceError> {
    let mut report = IngestReport::default();

    for record in records {
        let title = record.product_title.clone();
        let product = match record.into_product(default_currency) {
            Ok(product) => product,
            Err(e) => {
                report.rejected.push(RejectedRecord {
                    title,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        match store.insert_product(product) {
            Ok(Some(_)) => report.inserted += 1,
            Ok(None) => report.ignored += 1,
            Err(e @ CommerceError::StoreUnavailable(_)) => return Err(e),
            Err(e) => report.rejected.push(RejectedRecord {
                title,
                reason: e.to_string(),
            }),
        }
    }

    Ok(report)
}
