//! Storage layer for shoestock - persistence of the inventory between runs.
//!
//! [`InventoryStorage`] is the seam the session talks to; [`TextFileStorage`]
//! keeps records in a comma-delimited text file with a header line.

mod text_file;
mod traits;

pub use text_file::TextFileStorage;
pub use traits::{InventoryStorage, LoadOutcome};
