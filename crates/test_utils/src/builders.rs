//! Test Data Builders
//!
//! Provides builder patterns for constructing test bills with sensible
//! defaults. Tests specify only the fields they care about.

use core_kernel::Money;
use domain_split::{DiscountPolicy, Ledger, LineItem, Participant};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Builder for constructing test line items
pub struct LineItemBuilder {
    name: String,
    unit_rate: Money,
    quantity: u32,
    shared_by: Vec<Participant>,
    discount_percent: Option<Decimal>,
}

impl Default for LineItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LineItemBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            name: "Margherita".to_string(),
            unit_rate: Money::new(dec!(10)),
            quantity: 1,
            shared_by: vec![Participant::from("ana")],
            discount_percent: None,
        }
    }

    /// Sets the item name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the per-unit rate
    pub fn with_unit_rate(mut self, rate: Decimal) -> Self {
        self.unit_rate = Money::new(rate);
        self
    }

    /// Sets the quantity
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the sharers from plain names
    pub fn shared_by(mut self, names: &[&str]) -> Self {
        self.shared_by = names.iter().map(|n| Participant::from(*n)).collect();
        self
    }

    /// Sets an item-level discount percentage
    pub fn with_discount(mut self, percent: Decimal) -> Self {
        self.discount_percent = Some(percent);
        self
    }

    /// Builds the line item, panicking on invalid test data
    pub fn build(self) -> LineItem {
        let item = LineItem::new(self.name, self.unit_rate, self.quantity, self.shared_by)
            .expect("builder line item must be valid");
        match self.discount_percent {
            Some(percent) => item
                .with_discount(percent)
                .expect("builder discount must be in range"),
            None => item,
        }
    }
}

/// Builder for constructing test ledgers
pub struct LedgerBuilder {
    items: Vec<LineItem>,
    tax_percent: Decimal,
    discount_percent: Decimal,
    policy: DiscountPolicy,
}

impl Default for LedgerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerBuilder {
    /// Creates a new builder for an empty bill
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            tax_percent: Decimal::ZERO,
            discount_percent: Decimal::ZERO,
            policy: DiscountPolicy::default(),
        }
    }

    /// Appends a line item
    pub fn with_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    /// Sets the tax percentage
    pub fn with_tax(mut self, percent: Decimal) -> Self {
        self.tax_percent = percent;
        self
    }

    /// Sets the discount percentage
    pub fn with_discount(mut self, percent: Decimal) -> Self {
        self.discount_percent = percent;
        self
    }

    /// Sets the discount policy
    pub fn with_policy(mut self, policy: DiscountPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builds the ledger, panicking on invalid test data
    pub fn build(self) -> Ledger {
        let mut ledger = Ledger::new(self.policy);
        for item in self.items {
            ledger.add_item(item);
        }
        ledger
            .set_tax(self.tax_percent)
            .expect("builder tax must be non-negative");
        ledger
            .set_discount(self.discount_percent)
            .expect("builder discount must be non-negative");
        ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_builder_defaults() {
        let item = LineItemBuilder::new().build();

        assert_eq!(item.name(), "Margherita");
        assert_eq!(item.total().amount(), dec!(10));
        assert_eq!(item.shared_by().len(), 1);
    }

    #[test]
    fn test_ledger_builder() {
        let ledger = LedgerBuilder::new()
            .with_item(LineItemBuilder::new().shared_by(&["ana", "ben"]).build())
            .with_tax(dec!(5))
            .with_policy(DiscountPolicy::OnSubtotal)
            .build();

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.tax_percent(), dec!(5));
        assert_eq!(ledger.policy(), DiscountPolicy::OnSubtotal);
    }
}
