//! Keyword and budget recommendation.

use crate::error::CommerceError;
use crate::money::Money;
use crate::search::{accumulate, rank, tokenize, RankedResult};
use crate::store::CatalogStore;
use serde::{Deserialize, Serialize};

/// A free-text phrase with a price ceiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub phrase: String,
    /// Inclusive upper bound on price.
    pub budget: Money,
}

impl SearchQuery {
    pub fn new(phrase: impl Into<String>, budget: Money) -> Self {
        Self {
            phrase: phrase.into(),
            budget,
        }
    }

    pub fn tokens(&self) -> Vec<String> {
        tokenize(&self.phrase)
    }
}

/// Tokenize, match and rank in one call.
///
/// The full ranking is returned; paging is up to the caller.
pub fn recommend<S: CatalogStore + ?Sized>(
    store: &S,
    query: &SearchQuery,
) -> Result<RankedResult, CommerceError> {
    if query.budget.is_negative() {
        return Err(CommerceError::ValidationError(format!(
            "budget must not be negative: {}",
            query.budget.display_amount()
        )));
    }

    let record = accumulate(store, &query.tokens(), query.budget)?;
    Ok(rank(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;
    use crate::search::DEFAULT_PAGE_SIZE;
    use crate::testing::{new_product, MemoryCatalog};

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    #[test]
    fn test_black_chair_scenario() {
        let catalog = MemoryCatalog::default();
        let a = catalog.add("black office chair", 4000);
        let _b = catalog.add("white office chair", 9000);
        let c = catalog.add("black desk", 4000);

        let query = SearchQuery::new("black chair", usd(5000));
        assert_eq!(query.tokens(), vec!["black", "chair"]);

        let result = recommend(&catalog, &query).unwrap();
        let ids: Vec<_> = result.products().iter().map(|p| p.product_id.clone()).collect();
        assert_eq!(ids, vec![a, c]);
        assert_eq!(result.products()[0].score, 2);
        assert_eq!(result.products()[1].score, 1);

        let page = result.page(DEFAULT_PAGE_SIZE, 0).unwrap();
        assert_eq!(page.items.len(), 2);
        assert!(!page.has_more);
    }

    #[test]
    fn test_budget_boundary_uses_minor_units() {
        let catalog = MemoryCatalog::default();
        catalog.add("Black Chair", 4000);

        let budget = Money::parse_decimal_truncated("39.995", Currency::USD).unwrap();
        let result = recommend(&catalog, &SearchQuery::new("black", budget)).unwrap();
        assert!(result.is_empty());

        let result = recommend(&catalog, &SearchQuery::new("black", usd(4000))).unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_other_currency_products_excluded() {
        let catalog = MemoryCatalog::default();
        let chair = catalog.add("Chair", 3000);
        let mut euro = new_product("Euro Chair", 3000);
        euro.price = Money::new(3000, Currency::EUR);
        catalog.insert_product(euro).unwrap();

        let result = recommend(&catalog, &SearchQuery::new("chair", usd(5000))).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.products()[0].product_id, chair);
    }

    #[test]
    fn test_blank_phrase_no_results() {
        let catalog = MemoryCatalog::default();
        catalog.add("Chair", 1000);

        let result = recommend(&catalog, &SearchQuery::new("   ", usd(1000))).unwrap();
        assert!(result.is_empty());
        assert!(result.page(DEFAULT_PAGE_SIZE, 0).unwrap().is_no_match());
    }

    #[test]
    fn test_negative_budget_rejected() {
        let catalog = MemoryCatalog::default();
        let result = recommend(&catalog, &SearchQuery::new("chair", usd(-1)));
        assert!(matches!(result, Err(CommerceError::ValidationError(_))));
    }

    #[test]
    fn test_recommend_pages_of_five() {
        let catalog = MemoryCatalog::default();
        for i in 0..7 {
            catalog.add(&format!("Lamp {}", i), 1000);
        }

        let result = recommend(&catalog, &SearchQuery::new("lamp", usd(1000))).unwrap();
        let mut pages = result.pages(DEFAULT_PAGE_SIZE).unwrap();
        let first = pages.next_page().unwrap();
        assert_eq!(first.items.len(), 5);
        assert!(first.has_more);
        let second = pages.next_page().unwrap();
        assert_eq!(second.items.len(), 2);
        assert!(!second.has_more);
    }
}
