//! Per-request match accumulation.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::store::CatalogStore;
use std::collections::HashMap;

/// A product that matched at least one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEntry {
    pub product_id: ProductId,
    /// URL from the first row that matched.
    pub url: String,
    /// Number of (token, row) hits; always at least 1.
    pub score: u32,
}

/// Matched products in first-hit order.
#[derive(Debug, Clone, Default)]
pub struct MatchRecord {
    entries: Vec<MatchEntry>,
    index: HashMap<ProductId, usize>,
}

impl MatchRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one hit for `product_id`. The URL is kept only on first sight.
    pub fn record_hit(&mut self, product_id: &ProductId, url: &str) {
        match self.index.get(product_id) {
            Some(&pos) => self.entries[pos].score += 1,
            None => {
                self.index.insert(product_id.clone(), self.entries.len());
                self.entries.push(MatchEntry {
                    product_id: product_id.clone(),
                    url: url.to_string(),
                    score: 1,
                });
            }
        }
    }

    pub fn get(&self, product_id: &ProductId) -> Option<&MatchEntry> {
        self.index.get(product_id).map(|&pos| &self.entries[pos])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<MatchEntry> {
        self.entries
    }
}

/// Run one catalog query per token and score the returned rows.
///
/// A store failure on any token fails the whole call; no partial record is
/// returned. An empty token list never touches the store.
pub fn accumulate<S: CatalogStore + ?Sized>(
    store: &S,
    tokens: &[String],
    budget: Money,
) -> Result<MatchRecord, CommerceError> {
    let mut record = MatchRecord::new();

    for token in tokens {
        for product in store.find_by_budget_and_title(budget, token)? {
            record.record_hit(&product.id, &product.url);
        }
    }

    Ok(record)
}
