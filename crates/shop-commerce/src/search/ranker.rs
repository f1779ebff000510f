//! Ranking of accumulated matches.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::search::matcher::MatchRecord;
use crate::search::paginator::{paginate, Page, Paginator};
use serde::{Deserialize, Serialize};

/// One recommended product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedProduct {
    pub product_id: ProductId,
    pub product_url: String,
    #[serde(skip)]
    pub score: u32,
}

/// Recommendations ordered by descending score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedResult {
    products: Vec<RankedProduct>,
}

impl RankedResult {
    pub fn products(&self) -> &[RankedProduct] {
        &self.products
    }

    pub fn into_products(self) -> Vec<RankedProduct> {
        self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Slice out one page.
    pub fn page(&self, page_size: usize, cursor: usize) -> Result<Page<RankedProduct>, CommerceError> {
        paginate(&self.products, page_size, cursor)
    }

    /// Consume into a forward-only page iterator.
    pub fn pages(self, page_size: usize) -> Result<Paginator<RankedProduct>, CommerceError> {
        Paginator::new(self.products, page_size)
    }
}

/// Order matches by descending score.
///
/// The sort is stable and keyed on score alone: equal scores keep the order
/// in which the products were first matched.
pub fn rank(record: MatchRecord) -> RankedResult {
    let mut products: Vec<RankedProduct> = record
        .into_entries()
        .into_iter()
        .map(|e| RankedProduct {
            product_id: e.product_id,
            product_url: e.url,
            score: e.score,
        })
        .collect();

    products.sort_by(|a, b| b.score.cmp(&a.score));

    RankedResult { products }
}
