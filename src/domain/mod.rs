//! Domain types for shoestock
//!
//! - Shoe: one inventory line item (country, code, product, cost, quantity)
//! - Currency: how money amounts are rendered for display

pub mod currency;
pub mod shoe;

pub use currency::Currency;
pub use shoe::{FIELD_COUNT, HEADER, Shoe};
