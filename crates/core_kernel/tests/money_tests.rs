//! Comprehensive unit tests for the Money module
//!
//! Tests cover money creation, arithmetic operations, parsing,
//! currency handling, rates, and edge cases.

use core_kernel::{Currency, Money, MoneyError, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_creates_money_with_correct_amount() {
        let m = Money::new(dec!(1500.75), Currency::BRL);
        assert_eq!(m.amount(), dec!(1500.75));
        assert_eq!(m.currency(), Currency::BRL);
    }

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::BRL);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_from_minor_converts_centavos_correctly() {
        let m = Money::from_minor(150075, Currency::BRL);
        assert_eq!(m.amount(), dec!(1500.75));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::BRL);
        assert!(m.is_zero());
        assert_eq!(m.currency(), Currency::BRL);
    }

    #[test]
    fn test_negative_amount_creation() {
        let m = Money::new(dec!(-100.00), Currency::BRL);
        assert!(m.is_negative());
        assert_eq!(m.amount(), dec!(-100.00));
    }
}

mod predicates {
    use super::*;

    #[test]
    fn test_is_zero_true_for_zero_amount() {
        let m = Money::zero(Currency::BRL);
        assert!(m.is_zero());
        assert!(!m.is_positive());
        assert!(!m.is_negative());
    }

    #[test]
    fn test_is_positive_for_positive_amount() {
        let m = Money::new(dec!(0.01), Currency::BRL);
        assert!(m.is_positive());
        assert!(!m.is_negative());
    }

    #[test]
    fn test_is_negative_for_negative_amount() {
        let m = Money::new(dec!(-0.01), Currency::BRL);
        assert!(m.is_negative());
        assert!(!m.is_positive());
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_same_currency() {
        let a = Money::new(dec!(1000.00), Currency::BRL);
        let b = Money::new(dec!(120.00), Currency::BRL);
        let result = a.checked_add(&b).unwrap();
        assert_eq!(result.amount(), dec!(1120.00));
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let a = Money::new(dec!(100.00), Currency::BRL);
        let b = Money::new(dec!(50.00), Currency::USD);
        let result = a.checked_add(&b);
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn test_checked_sub_same_currency() {
        let a = Money::new(dec!(1120.00), Currency::BRL);
        let b = Money::new(dec!(1000.00), Currency::BRL);
        let result = a.checked_sub(&b).unwrap();
        assert_eq!(result.amount(), dec!(120.00));
    }

    #[test]
    fn test_checked_sub_can_go_negative() {
        let a = Money::new(dec!(30.00), Currency::BRL);
        let b = Money::new(dec!(100.00), Currency::BRL);
        let result = a.checked_sub(&b).unwrap();
        assert_eq!(result.amount(), dec!(-70.00));
    }

    #[test]
    fn test_add_operator_same_currency() {
        let a = Money::new(dec!(100.00), Currency::BRL);
        let b = Money::new(dec!(50.00), Currency::BRL);
        let result = a + b;
        assert_eq!(result.amount(), dec!(150.00));
    }

    #[test]
    fn test_sub_operator_same_currency() {
        let a = Money::new(dec!(100.00), Currency::BRL);
        let b = Money::new(dec!(30.00), Currency::BRL);
        let result = a - b;
        assert_eq!(result.amount(), dec!(70.00));
    }

    #[test]
    fn test_negation() {
        let m = Money::new(dec!(100.00), Currency::BRL);
        let neg = -m;
        assert_eq!(neg.amount(), dec!(-100.00));
    }

    #[test]
    fn test_multiply_by_scalar() {
        let m = Money::new(dec!(1000.00), Currency::BRL);
        let result = m.multiply(dec!(1.12));
        assert_eq!(result.amount(), dec!(1120.00));
    }

    #[test]
    fn test_multiply_by_zero() {
        let m = Money::new(dec!(100.00), Currency::BRL);
        let result = m.multiply(dec!(0));
        assert!(result.is_zero());
    }

    #[test]
    fn test_multiply_operator() {
        let m = Money::new(dec!(100.00), Currency::BRL);
        let result = m * dec!(2);
        assert_eq!(result.amount(), dec!(200.00));
    }

    #[test]
    fn test_divide_by_scalar() {
        let m = Money::new(dec!(100.00), Currency::BRL);
        let result = m.divide(dec!(4)).unwrap();
        assert_eq!(result.amount(), dec!(25.00));
    }

    #[test]
    fn test_divide_by_zero_error() {
        let m = Money::new(dec!(100.00), Currency::BRL);
        let result = m.divide(dec!(0));
        assert!(matches!(result, Err(MoneyError::DivisionByZero)));
    }

    #[test]
    fn test_divide_operator() {
        let m = Money::new(dec!(100.00), Currency::BRL);
        let result = m / dec!(5);
        assert_eq!(result.amount(), dec!(20.00));
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_abs_of_negative() {
        let m = Money::new(dec!(-42.50), Currency::BRL);
        assert_eq!(m.abs().amount(), dec!(42.50));
    }

    #[test]
    fn test_round_to_currency_two_places() {
        let m = Money::new(dec!(1120.4567), Currency::BRL);
        assert_eq!(m.round_to_currency().amount(), dec!(1120.46));
    }

    #[test]
    fn test_round_bankers_half_to_even() {
        let m = Money::new(dec!(2.345), Currency::BRL);
        assert_eq!(m.round_bankers(2).amount(), dec!(2.34));

        let m = Money::new(dec!(2.355), Currency::BRL);
        assert_eq!(m.round_bankers(2).amount(), dec!(2.36));
    }
}

mod parsing {
    use super::*;

    #[test]
    fn test_parse_plain_integer() {
        let m = Money::parse("1000", Currency::BRL).unwrap();
        assert_eq!(m.amount(), dec!(1000));
    }

    #[test]
    fn test_parse_dot_separator() {
        let m = Money::parse("1500.75", Currency::BRL).unwrap();
        assert_eq!(m.amount(), dec!(1500.75));
    }

    #[test]
    fn test_parse_comma_separator() {
        let m = Money::parse("1500,75", Currency::BRL).unwrap();
        assert_eq!(m.amount(), dec!(1500.75));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let m = Money::parse("  250,10  ", Currency::BRL).unwrap();
        assert_eq!(m.amount(), dec!(250.10));
    }

    #[test]
    fn test_parse_rejects_text() {
        let result = Money::parse("mil reais", Currency::BRL);
        assert!(matches!(result, Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_parse_rejects_empty() {
        let result = Money::parse("", Currency::BRL);
        assert!(matches!(result, Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_parse_rejects_mixed_separators() {
        // "1.000,50" style grouped input is not supported
        let result = Money::parse("1.000,50", Currency::BRL);
        assert!(matches!(result, Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_parse_error_preserves_input() {
        let err = Money::parse("abc", Currency::BRL).unwrap_err();
        assert_eq!(err, MoneyError::InvalidAmount("abc".to_string()));
    }
}

mod currency {
    use super::*;

    #[test]
    fn test_all_currencies_have_symbols() {
        let currencies = [Currency::BRL, Currency::USD, Currency::EUR];

        for currency in currencies {
            assert!(!currency.symbol().is_empty());
            assert!(!currency.code().is_empty());
        }
    }

    #[test]
    fn test_currency_codes() {
        assert_eq!(Currency::BRL.code(), "BRL");
        assert_eq!(Currency::USD.code(), "USD");
        assert_eq!(Currency::EUR.code(), "EUR");
    }

    #[test]
    fn test_currency_decimal_places() {
        assert_eq!(Currency::BRL.decimal_places(), 2);
        assert_eq!(Currency::USD.decimal_places(), 2);
        assert_eq!(Currency::EUR.decimal_places(), 2);
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(format!("{}", Currency::BRL), "BRL");
        assert_eq!(format!("{}", Currency::USD), "USD");
    }
}

mod display {
    use super::*;

    #[test]
    fn test_money_display_brl() {
        let m = Money::new(dec!(1234.56), Currency::BRL);
        assert_eq!(format!("{}", m), "R$ 1234.56");
    }

    #[test]
    fn test_money_display_pads_decimals() {
        let m = Money::new(dec!(1120), Currency::BRL);
        assert_eq!(format!("{}", m), "R$ 1120.00");
    }

    #[test]
    fn test_money_display_eur() {
        let m = Money::new(dec!(1234.56), Currency::EUR);
        let display = format!("{}", m);
        assert!(display.contains("€"));
    }
}

mod rate {
    use super::*;

    #[test]
    fn test_rate_from_decimal() {
        let rate = Rate::new(dec!(0.175));
        assert_eq!(rate.as_decimal(), dec!(0.175));
    }

    #[test]
    fn test_rate_from_percentage() {
        let rate = Rate::from_percentage(dec!(17.5));
        assert_eq!(rate.as_decimal(), dec!(0.175));
    }

    #[test]
    fn test_rate_as_percentage() {
        let rate = Rate::new(dec!(0.12));
        assert_eq!(rate.as_percentage(), dec!(12.00));
    }

    #[test]
    fn test_rate_is_zero() {
        assert!(Rate::new(Decimal::ZERO).is_zero());
        assert!(!Rate::new(dec!(0.0001)).is_zero());
    }

    #[test]
    fn test_rate_complement() {
        let rate = Rate::new(dec!(0.225));
        assert_eq!(rate.complement().as_decimal(), dec!(0.775));
    }

    #[test]
    fn test_rate_apply() {
        let rate = Rate::from_percentage(dec!(15.0));
        let amount = Money::new(dec!(200.00), Currency::BRL);
        let result = rate.apply(&amount);
        assert_eq!(result.amount(), dec!(30.00));
    }

    #[test]
    fn test_rate_display() {
        let rate = Rate::from_percentage(dec!(17.5));
        assert_eq!(format!("{}", rate), "17.5%");
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_money_json_roundtrip() {
        let m = Money::new(dec!(100.50), Currency::BRL);
        let json = serde_json::to_string(&m).unwrap();
        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }

    #[test]
    fn test_currency_json_roundtrip() {
        let c = Currency::BRL;
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"BRL\"");
        let deserialized: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(c, deserialized);
    }

    #[test]
    fn test_rate_json_roundtrip() {
        let r = Rate::new(dec!(0.175));
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rate = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }
}

mod equality {
    use super::*;

    #[test]
    fn test_money_equality_same_values() {
        let a = Money::new(dec!(100.00), Currency::BRL);
        let b = Money::new(dec!(100.00), Currency::BRL);
        assert_eq!(a, b);
    }

    #[test]
    fn test_money_inequality_different_amounts() {
        let a = Money::new(dec!(100.00), Currency::BRL);
        let b = Money::new(dec!(100.01), Currency::BRL);
        assert_ne!(a, b);
    }

    #[test]
    fn test_money_inequality_different_currencies() {
        let a = Money::new(dec!(100.00), Currency::BRL);
        let b = Money::new(dec!(100.00), Currency::USD);
        assert_ne!(a, b);
    }

    #[test]
    fn test_money_hash_equality() {
        use std::collections::HashSet;

        let a = Money::new(dec!(100.00), Currency::BRL);
        let b = Money::new(dec!(100.00), Currency::BRL);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }
}
