//! Cart ledger and pricing.

mod item;
mod ledger;
pub mod pricing;

pub use item::{CartLineItem, CartProductRef};
pub use ledger::Cart;
pub use pricing::PricingResult;
