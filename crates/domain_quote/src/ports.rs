//! External collaborator ports
//!
//! The engine never fetches benchmark rates itself. External fetchers
//! (e.g. a central-bank series client) implement [`BenchmarkRateProvider`]
//! and hand the latest annual percentage in per call.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BenchmarkError;

/// An annual benchmark rate in percentage points (e.g. Selic, CDI)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRate(Decimal);

impl BenchmarkRate {
    /// Creates a benchmark rate from annual percentage points (12.0 = 12% p.a.)
    pub const fn from_annual_percentage(percentage: Decimal) -> Self {
        Self(percentage)
    }

    /// Returns the annual percentage points
    pub const fn annual_percentage(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for BenchmarkRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% p.a.", self.0.normalize())
    }
}

/// Source of the latest benchmark rate
///
/// The engine calls it synchronously, once per quote.
pub trait BenchmarkRateProvider: Send + Sync {
    /// Returns the latest annual benchmark rate
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError`] when the underlying series cannot be read.
    fn latest(&self) -> Result<BenchmarkRate, BenchmarkError>;
}

/// Provider backed by a fixed rate
///
/// Useful in tests and for callers that already fetched the value
/// themselves.
#[derive(Debug, Clone, Copy)]
pub struct FixedBenchmarkRate {
    rate: BenchmarkRate,
}

impl FixedBenchmarkRate {
    /// Creates a provider that always returns `rate`
    pub const fn new(rate: BenchmarkRate) -> Self {
        Self { rate }
    }
}

impl BenchmarkRateProvider for FixedBenchmarkRate {
    fn latest(&self) -> Result<BenchmarkRate, BenchmarkError> {
        Ok(self.rate)
    }
}
