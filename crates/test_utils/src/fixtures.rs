//! Test Fixtures
//!
//! Pre-built bills and participants for common test scenarios.

use core_kernel::Money;
use domain_split::{DiscountPolicy, Ledger, LineItem, Participant};
use rust_decimal_macros::dec;

/// Common participants used across the test suite
pub struct ParticipantFixtures;

impl ParticipantFixtures {
    pub fn ana() -> Participant {
        Participant::from("ana")
    }

    pub fn ben() -> Participant {
        Participant::from("ben")
    }

    pub fn cara() -> Participant {
        Participant::from("cara")
    }
}

/// Pre-built bills for common scenarios
pub struct BillFixtures;

impl BillFixtures {
    /// One 100.00 item shared evenly by ana and ben, no tax or discount
    pub fn dinner_for_two() -> Ledger {
        let mut ledger = Ledger::default();
        ledger.add_item(
            LineItem::new(
                "Dinner",
                Money::new(dec!(100)),
                1,
                vec![ParticipantFixtures::ana(), ParticipantFixtures::ben()],
            )
            .expect("fixture line item is valid"),
        );
        ledger
    }

    /// A 10.00 item shared three ways - the total does not divide evenly
    pub fn three_way_odd_split() -> Ledger {
        let mut ledger = Ledger::default();
        ledger.add_item(
            LineItem::new(
                "Salad",
                Money::new(dec!(10)),
                1,
                vec![
                    ParticipantFixtures::ana(),
                    ParticipantFixtures::ben(),
                    ParticipantFixtures::cara(),
                ],
            )
            .expect("fixture line item is valid"),
        );
        ledger
    }

    /// A multi-item bill with uneven sharing, tax, and discount
    pub fn restaurant_bill(policy: DiscountPolicy) -> Ledger {
        let ana = ParticipantFixtures::ana();
        let ben = ParticipantFixtures::ben();
        let cara = ParticipantFixtures::cara();

        let mut ledger = Ledger::new(policy);
        ledger.add_item(
            LineItem::new(
                "Pizza",
                Money::new(dec!(18.40)),
                2,
                vec![ana.clone(), ben.clone(), cara.clone()],
            )
            .expect("fixture line item is valid"),
        );
        ledger.add_item(
            LineItem::new("Wine", Money::new(dec!(31.00)), 1, vec![ana, cara])
                .expect("fixture line item is valid"),
        );
        ledger.add_item(
            LineItem::new("Tiramisu", Money::new(dec!(7.25)), 3, vec![ben])
                .expect("fixture line item is valid"),
        );
        ledger.set_tax(dec!(8.25)).expect("fixture tax is valid");
        ledger
            .set_discount(dec!(10))
            .expect("fixture discount is valid");
        ledger
    }
}
