//! Keyword recommendation.
//!
//! A phrase is split into tokens, each token runs one budget-bounded title
//! query, every returned row adds a point to its product, and products are
//! ranked by points with ties left in first-match order.

mod matcher;
mod paginator;
mod query;
mod ranker;
mod tokenizer;

pub use matcher::{accumulate, MatchEntry, MatchRecord};
pub use paginator::{paginate, Page, Paginator, DEFAULT_PAGE_SIZE};
pub use query::{recommend, SearchQuery};
pub use ranker::{rank, RankedProduct, RankedResult};
pub use tokenizer::tokenize;
