//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the quote engine. Fixtures are
//! consistent and predictable so tests can assert exact values.

use chrono::NaiveDate;
use core_kernel::{Currency, Money};
use domain_quote::{
    BenchmarkError, BenchmarkRate, BenchmarkRateProvider, ReferenceRow, ReferenceTable, TermDays,
};
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Standard BRL principal for quote tests
    pub fn brl_1000() -> Money {
        Money::new(dec!(1000.00), Currency::BRL)
    }

    /// Small BRL amount
    pub fn brl_100() -> Money {
        Money::new(dec!(100.00), Currency::BRL)
    }

    /// Zero BRL amount
    pub fn brl_zero() -> Money {
        Money::zero(Currency::BRL)
    }

    /// USD amount for currency mismatch tests
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }
}

/// Fixture for reference table test data
pub struct TableFixtures;

impl TableFixtures {
    /// Rows mirroring a small bank offer sheet
    pub fn standard_rows() -> Vec<ReferenceRow> {
        vec![
            ReferenceRow::new("CDB Banco Alfa", TermDays::new(180), dec!(1.02)),
            ReferenceRow::new("CDB Banco Alfa", TermDays::new(360), dec!(1.05)),
            ReferenceRow::new("CDB Banco Alfa", TermDays::new(720), dec!(1.10)),
            ReferenceRow::new("LCI Banco Beta", TermDays::new(360), dec!(0.93)),
            ReferenceRow::new("LCI Banco Beta", TermDays::new(720), dec!(0.97)),
            ReferenceRow::new("Tesouro Pos", TermDays::new(365), dec!(1.00)),
        ]
    }

    /// Table built from the standard rows
    pub fn standard_table() -> ReferenceTable {
        ReferenceTable::from_rows(Self::standard_rows()).expect("standard rows are unique")
    }

    /// One-product table with a unit multiplier at 365 days
    pub fn unit_table() -> ReferenceTable {
        ReferenceTable::from_rows(vec![ReferenceRow::new(
            "CDB Banco Alfa",
            TermDays::new(365),
            dec!(1.0),
        )])
        .expect("single row cannot collide")
    }
}

/// Fixture for benchmark rates
pub struct BenchmarkFixtures;

impl BenchmarkFixtures {
    /// Selic at 12% p.a.
    pub fn selic_12() -> BenchmarkRate {
        BenchmarkRate::from_annual_percentage(dec!(12.00))
    }

    /// CDI at 10.65% p.a.
    pub fn cdi_10_65() -> BenchmarkRate {
        BenchmarkRate::from_annual_percentage(dec!(10.65))
    }

    /// Zero benchmark for degenerate-rate paths
    pub fn flat() -> BenchmarkRate {
        BenchmarkRate::from_annual_percentage(dec!(0))
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard application date (Jan 15, 2024)
    pub fn application_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }
}

/// Provider that always fails, for exercising error paths
#[derive(Debug, Clone)]
pub struct UnavailableBenchmark {
    source_name: String,
}

impl UnavailableBenchmark {
    /// Creates a failing provider with a source name for error context
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
        }
    }
}

impl Default for UnavailableBenchmark {
    fn default() -> Self {
        Self::new("sgs-selic")
    }
}

impl BenchmarkRateProvider for UnavailableBenchmark {
    fn latest(&self) -> Result<BenchmarkRate, BenchmarkError> {
        Err(BenchmarkError::unavailable(
            self.source_name.clone(),
            "series unavailable",
        ))
    }
}
