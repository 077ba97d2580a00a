//! Read-only reports over the inventory.
//!
//! `summary` computes, `views` renders, `table` draws the grids.

pub mod summary;
pub mod table;
pub mod views;

pub use summary::{CountryTotal, ItemValue, country_totals, item_values, total_value};
pub use table::{Align, Table};
