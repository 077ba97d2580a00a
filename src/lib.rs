//! shoestock - a command-line inventory tracker for a shoe warehouse
//!
//! Records live in an ordered in-memory inventory for the length of a session
//! and are persisted to a comma-delimited text file: appended on add,
//! rewritten in full on restock.

pub mod config;
pub mod domain;
pub mod error;
pub mod report;
pub mod shell;
pub mod storage;
pub mod store;
pub mod validation;

pub use error::{InventoryError, Result};
