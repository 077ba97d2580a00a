//! Parsers for user-typed cost, quantity, restock amount and confirmation.
//!
//! Each parser returns an [`InputError`] whose display text is the message
//! shown to the user before reprompting.

use std::num::{IntErrorKind, ParseIntError};

use thiserror::Error;

/// Reasons a typed value is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a valid number")]
    NotANumber,

    #[error("Cost must be positive")]
    NonPositiveCost,

    #[error("Please enter a whole number")]
    NotAWholeNumber,

    #[error("Quantity can't be negative")]
    NegativeQuantity,

    #[error("Quantity is too large")]
    QuantityTooLarge,

    #[error("Quantity must be positive")]
    NonPositiveRestock,

    #[error("Invalid quantity")]
    InvalidRestock,
}

/// Parse a unit cost. Must be a finite number greater than zero.
pub fn parse_cost(raw: &str) -> Result<f64, InputError> {
    let cost: f64 = raw.trim().parse().map_err(|_| InputError::NotANumber)?;
    if !cost.is_finite() {
        return Err(InputError::NotANumber);
    }
    if cost > 0.0 {
        Ok(cost)
    } else {
        Err(InputError::NonPositiveCost)
    }
}

/// Parse a whole number, mapping overflow to the same errors as an
/// in-range value that is too large or too small.
fn parse_whole(raw: &str, invalid: InputError, negative: InputError) -> Result<i64, InputError> {
    raw.trim().parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => InputError::QuantityTooLarge,
        IntErrorKind::NegOverflow => negative,
        _ => invalid,
    })
}

/// Parse a stock quantity. Zero is allowed.
pub fn parse_quantity(raw: &str) -> Result<u32, InputError> {
    let quantity = parse_whole(raw, InputError::NotAWholeNumber, InputError::NegativeQuantity)?;
    if quantity < 0 {
        return Err(InputError::NegativeQuantity);
    }
    u32::try_from(quantity).map_err(|_| InputError::QuantityTooLarge)
}

/// Parse the number of units to add during a restock. Must be at least one.
pub fn parse_restock_amount(raw: &str) -> Result<u32, InputError> {
    let amount = parse_whole(raw, InputError::InvalidRestock, InputError::NonPositiveRestock)?;
    if amount <= 0 {
        return Err(InputError::NonPositiveRestock);
    }
    u32::try_from(amount).map_err(|_| InputError::QuantityTooLarge)
}

/// A literal "yes" in any letter case confirms.
pub fn is_confirmation(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("yes")
}

/// Product codes are compared and stored in uppercase.
pub fn normalize_code(raw: &str) -> String {
    raw.to_uppercase()
}
