//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random bills that maintain
//! domain invariants.

use core_kernel::Money;
use domain_split::{DiscountPolicy, Ledger, LineItem, Participant};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// The fixed pool participants are drawn from
pub fn participant_pool() -> Vec<Participant> {
    ["ana", "ben", "cara", "dev", "eli"]
        .into_iter()
        .map(Participant::from)
        .collect()
}

/// Strategy for generating non-negative unit rates in cents
pub fn unit_rate_strategy() -> impl Strategy<Value = Money> {
    (0i64..100_000i64).prop_map(Money::from_minor)
}

/// Strategy for generating percentages from 0% to 50% with two decimals
pub fn percent_strategy() -> impl Strategy<Value = Decimal> {
    (0u32..5000u32).prop_map(|n| Decimal::new(n as i64, 2))
}

/// Strategy for generating an optional item-level discount (0% to 100%)
pub fn item_discount_strategy() -> impl Strategy<Value = Option<Decimal>> {
    proptest::option::of((0u32..10000u32).prop_map(|n| Decimal::new(n as i64, 2)))
}

/// Strategy for generating either discount policy
pub fn policy_strategy() -> impl Strategy<Value = DiscountPolicy> {
    prop_oneof![
        Just(DiscountPolicy::PostTax),
        Just(DiscountPolicy::OnSubtotal),
    ]
}

/// Strategy for generating a valid line item with sharers from the pool
pub fn line_item_strategy() -> impl Strategy<Value = LineItem> {
    (
        "[a-z]{3,12}",
        unit_rate_strategy(),
        1u32..10u32,
        proptest::sample::subsequence(participant_pool(), 1..=5),
        item_discount_strategy(),
    )
        .prop_map(|(name, rate, quantity, shared_by, discount)| {
            let item = LineItem::new(name, rate, quantity, shared_by)
                .expect("generated line item is valid");
            match discount {
                Some(percent) => item
                    .with_discount(percent)
                    .expect("generated discount is in range"),
                None => item,
            }
        })
}

/// Strategy for generating a populated ledger with rates and a policy
pub fn ledger_strategy() -> impl Strategy<Value = Ledger> {
    (
        proptest::collection::vec(line_item_strategy(), 1..6),
        percent_strategy(),
        percent_strategy(),
        policy_strategy(),
    )
        .prop_map(|(items, tax, discount, policy)| {
            let mut ledger = Ledger::new(policy);
            for item in items {
                ledger.add_item(item);
            }
            ledger.set_tax(tax).expect("generated tax is non-negative");
            ledger
                .set_discount(discount)
                .expect("generated discount is non-negative");
            ledger
        })
}
