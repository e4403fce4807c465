//! Bill ledger and share allocation
//!
//! This module provides the calculation engine: a mutable working set of
//! line items plus global tax and discount rates, and a pure derivation
//! producing each participant's share of the final total.
//!
//! # Invariants
//!
//! - Every item's cost is fully distributed among its sharers, so the sum
//!   of base shares equals the subtotal.
//! - Unrounded shares sum to the final total under either discount policy.
//! - Rounding happens once, per participant, as the final step; the
//!   residual cent drift (at most 0.01 per participant) is accepted rather
//!   than pushed onto one participant.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::BTreeMap;

use core_kernel::{Money, Rate};

use crate::error::SplitError;
use crate::line_item::{LineItem, Participant};
use crate::policy::DiscountPolicy;

/// The bill splitting calculation engine
///
/// A Ledger is constructed empty, mutated by adding, editing, and removing
/// line items and by setting tax and discount rates, and discarded (or
/// `reset`) to start a new bill. It holds no identity beyond the current
/// in-memory session and performs no I/O; callers own the instance and
/// serialize access if they share one.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// Ordered working set of line items
    items: Vec<LineItem>,
    /// Global tax rate
    tax: Rate,
    /// Global discount rate
    discount: Rate,
    /// Which base the discount is computed against
    policy: DiscountPolicy,
}

impl Ledger {
    /// Creates an empty ledger with the given discount policy
    pub fn new(policy: DiscountPolicy) -> Self {
        Self {
            items: Vec::new(),
            tax: Rate::ZERO,
            discount: Rate::ZERO,
            policy,
        }
    }

    /// Appends a line item
    ///
    /// Items are validated at construction, so the append itself cannot
    /// fail.
    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Removes the line item at `index`, returning it
    ///
    /// # Errors
    ///
    /// `ItemNotFound` if `index` is out of range
    pub fn remove_item(&mut self, index: usize) -> Result<LineItem, SplitError> {
        if index >= self.items.len() {
            return Err(SplitError::ItemNotFound(index));
        }
        Ok(self.items.remove(index))
    }

    /// Replaces the line item at `index`
    ///
    /// # Errors
    ///
    /// `ItemNotFound` if `index` is out of range
    pub fn replace_item(&mut self, index: usize, item: LineItem) -> Result<(), SplitError> {
        let slot = self
            .items
            .get_mut(index)
            .ok_or(SplitError::ItemNotFound(index))?;
        *slot = item;
        Ok(())
    }

    /// Sets the tax percentage
    ///
    /// No upper bound is enforced; values above 100 are honored.
    ///
    /// # Errors
    ///
    /// `NegativeTax` for negative values; prior state is unchanged
    pub fn set_tax(&mut self, percent: Decimal) -> Result<(), SplitError> {
        if percent < Decimal::ZERO {
            return Err(SplitError::NegativeTax(percent));
        }
        self.tax = Rate::from_percentage(percent);
        Ok(())
    }

    /// Sets the tax from an absolute amount
    ///
    /// The amount is converted to a percentage against the current
    /// subtotal; a zero subtotal yields a zero rate.
    ///
    /// # Errors
    ///
    /// `NegativeTax` for negative amounts; prior state is unchanged
    pub fn set_tax_amount(&mut self, amount: Money) -> Result<(), SplitError> {
        if amount.is_negative() {
            return Err(SplitError::NegativeTax(amount.amount()));
        }
        let subtotal = self.subtotal();
        let percent = if subtotal.is_zero() {
            Decimal::ZERO
        } else {
            amount.amount() / subtotal.amount() * dec!(100)
        };
        self.tax = Rate::from_percentage(percent);
        Ok(())
    }

    /// Sets the discount percentage
    ///
    /// No upper bound is enforced; values above 100 are honored and may
    /// drive the final total negative.
    ///
    /// # Errors
    ///
    /// `NegativeDiscount` for negative values; prior state is unchanged
    pub fn set_discount(&mut self, percent: Decimal) -> Result<(), SplitError> {
        if percent < Decimal::ZERO {
            return Err(SplitError::NegativeDiscount(percent));
        }
        self.discount = Rate::from_percentage(percent);
        Ok(())
    }

    /// Clears items and rates to start a new bill, keeping the policy
    pub fn reset(&mut self) {
        self.items.clear();
        self.tax = Rate::ZERO;
        self.discount = Rate::ZERO;
    }

    /// Returns the current line items in order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the number of line items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the ledger holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the current tax percentage
    pub fn tax_percent(&self) -> Decimal {
        self.tax.as_percentage()
    }

    /// Returns the current discount percentage
    pub fn discount_percent(&self) -> Decimal {
        self.discount.as_percentage()
    }

    /// Returns the active discount policy
    pub fn policy(&self) -> DiscountPolicy {
        self.policy
    }

    /// Returns the union of every item's sharers, in first-appearance order
    ///
    /// The participant set has no existence of its own; it is recomputed
    /// from items whenever asked for.
    pub fn participants(&self) -> Vec<Participant> {
        let mut seen: Vec<Participant> = Vec::new();
        for item in &self.items {
            for participant in item.shared_by() {
                if !seen.contains(participant) {
                    seen.push(participant.clone());
                }
            }
        }
        seen
    }

    /// Sum of every item's effective cost
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::total).sum()
    }

    /// Tax charged on the subtotal
    pub fn tax_amount(&self) -> Money {
        self.tax.apply(&self.subtotal())
    }

    /// Discount computed against the policy's base
    pub fn discount_amount(&self) -> Money {
        match self.policy {
            DiscountPolicy::PostTax => self.discount.apply(&(self.subtotal() + self.tax_amount())),
            DiscountPolicy::OnSubtotal => self.discount.apply(&self.subtotal()),
        }
    }

    /// `subtotal + tax - discount`, under either policy
    pub fn final_total(&self) -> Money {
        self.subtotal() + self.tax_amount() - self.discount_amount()
    }

    /// Computes the full bill breakdown with per-participant shares
    ///
    /// Pure: recomputed from current state on every call, never fails for
    /// a valid ledger. The empty bill yields zero totals and an empty
    /// share map.
    pub fn calculate(&self) -> BillResult {
        let mut shares = self.allocate();
        for share in shares.values_mut() {
            *share = share.round_half_up(2);
        }

        tracing::debug!(
            items = self.items.len(),
            participants = shares.len(),
            policy = %self.policy,
            "allocated bill shares"
        );

        BillResult {
            subtotal: self.subtotal(),
            tax_amount: self.tax_amount(),
            discount_amount: self.discount_amount(),
            final_total: self.final_total(),
            shares,
        }
    }

    /// Three-pass proportional allocation, unrounded
    ///
    /// 1. Base pass: each item's total split evenly among its sharers.
    /// 2. Tax pass: tax distributed in proportion to base shares.
    /// 3. Discount pass: discount distributed against the policy's base,
    ///    mirroring the aggregate-level formula so shares sum to the
    ///    final total.
    pub fn allocate(&self) -> BTreeMap<Participant, Money> {
        let mut shares: BTreeMap<Participant, Money> = self
            .participants()
            .into_iter()
            .map(|participant| (participant, Money::ZERO))
            .collect();

        for item in &self.items {
            let per_sharer = item.per_sharer_amount();
            for participant in item.shared_by() {
                if let Some(share) = shares.get_mut(participant) {
                    *share += per_sharer;
                }
            }
        }

        // Equals the subtotal: the base pass distributes every item in full.
        let base_sum: Money = shares.values().copied().sum();
        if base_sum.is_zero() {
            return shares;
        }

        let tax_amount = self.tax_amount();
        let discount_amount = self.discount_amount();
        let base_shares = shares.clone();

        for share in shares.values_mut() {
            let proportion = share.amount() / base_sum.amount();
            *share += tax_amount.multiply(proportion);
        }

        match self.policy {
            DiscountPolicy::PostTax => {
                let total_after_tax: Money = shares.values().copied().sum();
                if !total_after_tax.is_zero() {
                    for share in shares.values_mut() {
                        let proportion = share.amount() / total_after_tax.amount();
                        *share -= discount_amount.multiply(proportion);
                    }
                }
            }
            DiscountPolicy::OnSubtotal => {
                for (participant, share) in shares.iter_mut() {
                    let proportion = base_shares[participant].amount() / base_sum.amount();
                    *share -= discount_amount.multiply(proportion);
                }
            }
        }

        shares
    }
}

/// The full bill breakdown produced by [`Ledger::calculate`]
///
/// Totals carry full precision; shares are rounded to two decimal places.
/// Produced fresh per calculation and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillResult {
    /// Sum of item costs before tax and discount
    pub subtotal: Money,
    /// Tax charged on the subtotal
    pub tax_amount: Money,
    /// Discount computed against the policy's base
    pub discount_amount: Money,
    /// `subtotal + tax - discount`
    pub final_total: Money,
    /// Each participant's rounded share of the final total
    pub shares: BTreeMap<Participant, Money>,
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use test_utils::generators::ledger_strategy;

    proptest! {
        #[test]
        fn unrounded_shares_sum_to_final_total(ledger in ledger_strategy()) {
            let sum: Money = ledger.allocate().values().copied().sum();
            let diff = (sum.amount() - ledger.final_total().amount()).abs();

            prop_assert!(diff < dec!(0.000000001), "diff was {}", diff);
        }

        #[test]
        fn rounded_share_drift_is_bounded(ledger in ledger_strategy()) {
            let result = ledger.calculate();
            let sum: Money = result.shares.values().copied().sum();
            let drift = (sum.amount() - result.final_total.amount()).abs();
            let bound = dec!(0.01) * Decimal::from(result.shares.len() as u64);

            prop_assert!(drift <= bound, "drift {} exceeded bound {}", drift, bound);
        }

        #[test]
        fn share_keys_match_participant_set(ledger in ledger_strategy()) {
            let result = ledger.calculate();
            let participants = ledger.participants();

            prop_assert_eq!(result.shares.len(), participants.len());
            for participant in &participants {
                prop_assert!(result.shares.contains_key(participant));
            }
        }
    }
}
