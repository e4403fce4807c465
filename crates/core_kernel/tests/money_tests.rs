//! Comprehensive unit tests for the Money module
//!
//! Tests cover money creation, arithmetic operations, rounding,
//! rate application, and edge cases.

use core_kernel::{Money, MoneyError, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_creates_money_with_correct_amount() {
        let m = Money::new(dec!(100.50));
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_new_keeps_full_precision() {
        let m = Money::new(dec!(100.123456789));
        assert_eq!(m.amount(), dec!(100.123456789));
    }

    #[test]
    fn test_from_minor_converts_cents_correctly() {
        let m = Money::from_minor(10050);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        assert!(Money::zero().is_zero());
        assert_eq!(Money::zero(), Money::ZERO);
    }

    #[test]
    fn test_negative_amount_creation() {
        let m = Money::new(dec!(-100.00));
        assert!(m.is_negative());
        assert_eq!(m.amount(), dec!(-100.00));
    }
}

mod predicates {
    use super::*;

    #[test]
    fn test_is_zero_true_for_zero_amount() {
        assert!(Money::ZERO.is_zero());
    }

    #[test]
    fn test_is_zero_false_for_positive_amount() {
        assert!(!Money::new(dec!(0.01)).is_zero());
    }

    #[test]
    fn test_is_positive_false_for_zero_and_negative() {
        assert!(!Money::ZERO.is_positive());
        assert!(!Money::new(dec!(-100.00)).is_positive());
        assert!(Money::new(dec!(100.00)).is_positive());
    }

    #[test]
    fn test_is_negative_false_for_zero_and_positive() {
        assert!(!Money::ZERO.is_negative());
        assert!(!Money::new(dec!(100.00)).is_negative());
        assert!(Money::new(dec!(-100.00)).is_negative());
    }

    #[test]
    fn test_abs() {
        assert_eq!(Money::new(dec!(-12.34)).abs().amount(), dec!(12.34));
        assert_eq!(Money::new(dec!(12.34)).abs().amount(), dec!(12.34));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_add_and_sub() {
        let a = Money::new(dec!(100.00));
        let b = Money::new(dec!(50.00));

        assert_eq!((a + b).amount(), dec!(150.00));
        assert_eq!((a - b).amount(), dec!(50.00));
    }

    #[test]
    fn test_add_assign_and_sub_assign() {
        let mut m = Money::new(dec!(10));
        m += Money::new(dec!(2.50));
        m -= Money::new(dec!(0.50));

        assert_eq!(m.amount(), dec!(12.00));
    }

    #[test]
    fn test_neg() {
        assert_eq!((-Money::new(dec!(5))).amount(), dec!(-5));
    }

    #[test]
    fn test_multiply_by_scalar() {
        let m = Money::new(dec!(10)).multiply(dec!(0.25));
        assert_eq!(m.amount(), dec!(2.50));
    }

    #[test]
    fn test_divide_by_scalar() {
        let m = Money::new(dec!(10)).divide(dec!(4)).unwrap();
        assert_eq!(m.amount(), dec!(2.5));
    }

    #[test]
    fn test_divide_by_zero_errors() {
        let result = Money::new(dec!(10)).divide(Decimal::ZERO);
        assert_eq!(result, Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_sum_over_iterator() {
        let total: Money = [dec!(1.10), dec!(2.20), dec!(3.30)]
            .into_iter()
            .map(Money::new)
            .sum();
        assert_eq!(total.amount(), dec!(6.60));
    }

    #[test]
    fn test_sum_of_empty_iterator_is_zero() {
        let total: Money = std::iter::empty::<Money>().sum();
        assert_eq!(total, Money::ZERO);
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_round_half_up_at_midpoint() {
        assert_eq!(Money::new(dec!(2.345)).round_half_up(2).amount(), dec!(2.35));
        assert_eq!(Money::new(dec!(2.344)).round_half_up(2).amount(), dec!(2.34));
    }

    #[test]
    fn test_round_half_up_negative_midpoint_moves_away_from_zero() {
        assert_eq!(
            Money::new(dec!(-2.345)).round_half_up(2).amount(),
            dec!(-2.35)
        );
    }

    #[test]
    fn test_round_is_a_noop_on_exact_cents() {
        assert_eq!(Money::new(dec!(2.34)).round_half_up(2).amount(), dec!(2.34));
    }
}

mod rates {
    use super::*;

    #[test]
    fn test_from_percentage() {
        let rate = Rate::from_percentage(dec!(8.25));
        assert_eq!(rate.as_decimal(), dec!(0.0825));
        assert_eq!(rate.as_percentage(), dec!(8.25));
    }

    #[test]
    fn test_zero_rate() {
        assert!(Rate::ZERO.is_zero());
        assert_eq!(Rate::ZERO.apply(&Money::new(dec!(100))), Money::ZERO);
    }

    #[test]
    fn test_apply_over_one_hundred_percent() {
        let rate = Rate::from_percentage(dec!(150));
        let applied = rate.apply(&Money::new(dec!(100)));
        assert_eq!(applied.amount(), dec!(150.00));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rate::from_percentage(dec!(12.5)).to_string(), "12.5%");
    }
}
