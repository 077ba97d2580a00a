//! Error types for shoestock
//!
//! Centralized error handling using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// All error types that can occur while tracking inventory
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A data line in the inventory file could not be parsed
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The backing file could not even be checked for existence
    #[error("Cannot access {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The inventory file exists but has no header line
    #[error("inventory file is empty (missing header line)")]
    MissingHeader,

    /// No record at the given position in the store
    #[error("No shoe at position {0}")]
    NotFound(usize),

    /// Restocking would push the quantity past what a record can hold
    #[error("Restocking {code} by {added} would overflow its quantity of {current}")]
    StockOverflow { code: String, current: u32, added: u32 },

    /// The console reached end of input
    #[error("Input closed")]
    InputClosed,

    /// The inventory file could not be read or written as delimited records
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for shoestock operations
pub type Result<T> = std::result::Result<T, InventoryError>;
