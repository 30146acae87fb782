//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{Currency, Money};
use domain_quote::{BenchmarkRate, ReferenceRow, TermDays};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for terms between one day and ten years
pub fn term_strategy() -> impl Strategy<Value = TermDays> {
    (1u32..3650u32).prop_map(TermDays::new)
}

/// Strategy for terms on either side of the tax bracket boundaries
pub fn bracket_boundary_term_strategy() -> impl Strategy<Value = TermDays> {
    prop_oneof![
        Just(TermDays::new(180)),
        Just(TermDays::new(181)),
        Just(TermDays::new(360)),
        Just(TermDays::new(361)),
        Just(TermDays::new(720)),
        Just(TermDays::new(721)),
    ]
}

/// Strategy for positive BRL principals up to R$ 10 million
pub fn principal_strategy() -> impl Strategy<Value = Money> {
    (1i64..1_000_000_000i64).prop_map(|minor| Money::from_minor(minor, Currency::BRL))
}

/// Strategy for CDI multipliers between 50% and 200% of the benchmark
pub fn multiplier_strategy() -> impl Strategy<Value = Decimal> {
    (50u32..200u32).prop_map(|pct| Decimal::new(pct as i64, 2))
}

/// Strategy for annual benchmark rates between 0% and 30% p.a.
pub fn benchmark_strategy() -> impl Strategy<Value = BenchmarkRate> {
    (0u32..3000u32)
        .prop_map(|bp| BenchmarkRate::from_annual_percentage(Decimal::new(bp as i64, 2)))
}

/// Strategy for investment names drawn from a realistic set
pub fn investment_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("CDB Banco Alfa".to_string()),
        Just("CDB Banco Gama".to_string()),
        Just("LCI Banco Beta".to_string()),
        Just("LCA Agro Delta".to_string()),
    ]
}

/// Strategy for reference rows
pub fn reference_row_strategy() -> impl Strategy<Value = ReferenceRow> {
    (investment_name_strategy(), term_strategy(), multiplier_strategy())
        .prop_map(|(investment, term, multiplier)| ReferenceRow::new(investment, term, multiplier))
}
