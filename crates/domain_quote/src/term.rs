//! Investment term handling
//!
//! A term is the number of days an investment is held. It drives the
//! period conversion for compounding, the withholding-tax bracket, and
//! the maturity date.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QuoteError;
use crate::DAYS_PER_YEAR;

/// An investment term expressed as a whole number of days
///
/// The day count doubles as the holding period for tax purposes. A
/// negative term is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermDays(u32);

impl TermDays {
    /// Creates a term from a day count
    pub const fn new(days: u32) -> Self {
        Self(days)
    }

    /// Returns the day count
    pub const fn days(&self) -> u32 {
        self.0
    }

    /// Returns the term as fractional years (days / 365)
    pub fn periods(&self) -> Decimal {
        Decimal::from(self.0) / Decimal::from(DAYS_PER_YEAR)
    }

    /// Returns the maturity date for an investment starting on `start`
    pub fn maturity_from(&self, start: NaiveDate) -> NaiveDate {
        start + Duration::days(self.0 as i64)
    }
}

impl fmt::Display for TermDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} dias", self.0)
    }
}

impl FromStr for TermDays {
    type Err = QuoteError;

    /// Parses term labels like `"360 dias"` or plain `"360"`
    ///
    /// Only the leading integer token is read, matching the labels the
    /// reference tables use for their term column.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let leading = s.trim().split_whitespace().next().unwrap_or("");
        leading
            .parse::<u32>()
            .map(TermDays::new)
            .map_err(|_| QuoteError::invalid_input("term", format!("not a day count: '{}'", s.trim())))
    }
}
