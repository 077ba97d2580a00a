//! In-memory record store.
//!
//! [`Inventory`] is the ordered list of shoes for the current run. It is the
//! source of truth while the session is open; persistence is the caller's job.

mod inventory;

pub use inventory::Inventory;
