//! Bill splitting domain errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in the bill splitting domain
///
/// All variants except `ItemNotFound` belong to the validation class:
/// recoverable by the caller correcting input. `ItemNotFound` signals a
/// caller bug (an indexed edit against a position that does not exist).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    /// Line item name is empty or whitespace
    #[error("Item name cannot be empty")]
    EmptyName,

    /// Line item unit rate is negative
    #[error("Unit rate cannot be negative: {0}")]
    NegativeRate(Decimal),

    /// Line item quantity is zero
    #[error("Quantity must be greater than zero")]
    ZeroQuantity,

    /// Line item has no sharers
    #[error("Item must be shared by at least one participant")]
    NoSharers,

    /// Item-level discount outside the 0-100 percent range
    #[error("Item discount must be between 0 and 100, got {0}")]
    ItemDiscountOutOfRange(Decimal),

    /// Negative tax rate or amount
    #[error("Tax cannot be negative: {0}")]
    NegativeTax(Decimal),

    /// Negative discount rate
    #[error("Discount cannot be negative: {0}")]
    NegativeDiscount(Decimal),

    /// Indexed edit against a non-existent line item
    #[error("No line item at index {0}")]
    ItemNotFound(usize),
}

impl SplitError {
    /// Returns true for errors the caller can recover from by correcting input
    pub fn is_validation(&self) -> bool {
        !matches!(self, SplitError::ItemNotFound(_))
    }
}
