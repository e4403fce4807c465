//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_split::BillResult;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Asserts that two Money values are approximately equal within a tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(money.is_zero(), "Expected zero money, got {}", money.amount());
}

/// Asserts that the rounded shares of a result sum to the final total
/// within the documented drift bound of one cent per participant
pub fn assert_share_drift_bounded(result: &BillResult) {
    let sum: Money = result.shares.values().copied().sum();
    let drift = (sum.amount() - result.final_total.amount()).abs();
    let bound = dec!(0.01) * Decimal::from(result.shares.len() as u64);

    assert!(
        drift <= bound,
        "Rounded shares drifted {} from the final total (bound {})",
        drift,
        bound
    );
}

/// Asserts that an error matches a specific variant
#[macro_export]
macro_rules! assert_err_variant {
    ($result:expr, $pattern:pat) => {
        match $result {
            Ok(value) => panic!(
                "Expected Err matching {}, got Ok({:?})",
                stringify!($pattern),
                value
            ),
            Err(ref e) => {
                assert!(
                    matches!(e, $pattern),
                    "Error {:?} does not match pattern {}",
                    e,
                    stringify!($pattern)
                );
            }
        }
    };
}
