//! Shopping cart.
//!
//! One row per product, holding the name and price copied at add time.

mod assets;
mod item;
mod ledger;

pub use assets::{validate_image_filename, AssetKeys, DEFAULT_NAMESPACE};
pub use item::{CartEntry, CartItem, CartSummary};
pub use ledger::{AssetOutcome, CartLedger, Removal, Upload};
