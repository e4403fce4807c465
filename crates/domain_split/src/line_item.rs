//! Line items and participants
//!
//! A line item is one purchased good or service: a per-unit rate, a
//! quantity, and the ordered set of participants sharing its cost. Items
//! are valid by construction, so the allocation passes never see a
//! zero-sharer division.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Money, Rate};

use crate::error::SplitError;

/// A bill participant, identified by a caller-normalized name
///
/// Name normalization and case folding across items is the caller's
/// responsibility; two spellings are two participants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Participant(String);

impl Participant {
    /// Creates a participant from a name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the participant name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the participant, returning the name
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Participant {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// A single purchased line on the bill
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    name: String,
    unit_rate: Money,
    quantity: u32,
    shared_by: Vec<Participant>,
    discount: Option<Rate>,
}

impl LineItem {
    /// Creates a validated line item
    ///
    /// Duplicate sharers collapse to one entry each, first occurrence wins.
    ///
    /// # Errors
    ///
    /// - `EmptyName` if the name is empty or whitespace
    /// - `NegativeRate` if the unit rate is below zero
    /// - `ZeroQuantity` if the quantity is zero
    /// - `NoSharers` if the sharer list is empty
    pub fn new(
        name: impl Into<String>,
        unit_rate: Money,
        quantity: u32,
        shared_by: Vec<Participant>,
    ) -> Result<Self, SplitError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SplitError::EmptyName);
        }
        if unit_rate.is_negative() {
            return Err(SplitError::NegativeRate(unit_rate.amount()));
        }
        if quantity == 0 {
            return Err(SplitError::ZeroQuantity);
        }

        let mut deduped: Vec<Participant> = Vec::with_capacity(shared_by.len());
        for participant in shared_by {
            if !deduped.contains(&participant) {
                deduped.push(participant);
            }
        }
        if deduped.is_empty() {
            return Err(SplitError::NoSharers);
        }

        Ok(Self {
            name,
            unit_rate,
            quantity,
            shared_by: deduped,
            discount: None,
        })
    }

    /// Applies an item-level discount percentage
    ///
    /// # Errors
    ///
    /// `ItemDiscountOutOfRange` unless `0 <= percent <= 100`
    pub fn with_discount(mut self, percent: Decimal) -> Result<Self, SplitError> {
        if percent < Decimal::ZERO || percent > dec!(100) {
            return Err(SplitError::ItemDiscountOutOfRange(percent));
        }
        self.discount = Some(Rate::from_percentage(percent));
        Ok(self)
    }

    /// Returns the item name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw per-unit rate
    pub fn unit_rate(&self) -> Money {
        self.unit_rate
    }

    /// Returns the quantity
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the participants sharing this item, in first-appearance order
    pub fn shared_by(&self) -> &[Participant] {
        &self.shared_by
    }

    /// Returns the item-level discount percentage, if any
    pub fn discount_percent(&self) -> Option<Decimal> {
        self.discount.map(|d| d.as_percentage())
    }

    /// Returns the per-unit rate net of any item-level discount
    ///
    /// The item-level discount applies at the point the item's contribution
    /// is computed, before any of the bill-level passes.
    pub fn effective_rate(&self) -> Money {
        match self.discount {
            Some(discount) => self.unit_rate - discount.apply(&self.unit_rate),
            None => self.unit_rate,
        }
    }

    /// Returns the item's total cost: effective rate times quantity
    pub fn total(&self) -> Money {
        self.effective_rate().multiply(Decimal::from(self.quantity))
    }

    /// Returns the even per-sharer slice of the item's total
    pub fn per_sharer_amount(&self) -> Money {
        // shared_by is non-empty by construction
        Money::new(self.total().amount() / Decimal::from(self.shared_by.len() as u64))
    }
}
