//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use core_kernel::{Currency, Money};
use domain_quote::{QuoteRequest, ReferenceRow, ReferenceTable, ReferenceTableError, TermDays};
use rust_decimal::Decimal;

use crate::fixtures::MoneyFixtures;

/// Builder for constructing quote requests
pub struct QuoteRequestBuilder {
    investment: String,
    term: TermDays,
    principal: Money,
}

impl Default for QuoteRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteRequestBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            investment: "CDB Banco Alfa".to_string(),
            term: TermDays::new(365),
            principal: MoneyFixtures::brl_1000(),
        }
    }

    /// Sets the investment name
    pub fn with_investment(mut self, investment: impl Into<String>) -> Self {
        self.investment = investment.into();
        self
    }

    /// Sets the term
    pub fn with_term(mut self, term: TermDays) -> Self {
        self.term = term;
        self
    }

    /// Sets the term from a day count
    pub fn with_term_days(mut self, days: u32) -> Self {
        self.term = TermDays::new(days);
        self
    }

    /// Sets the principal
    pub fn with_principal(mut self, principal: Money) -> Self {
        self.principal = principal;
        self
    }

    /// Sets the principal from a decimal BRL amount
    pub fn with_principal_brl(mut self, amount: Decimal) -> Self {
        self.principal = Money::new(amount, Currency::BRL);
        self
    }

    /// Builds the quote request
    pub fn build(self) -> QuoteRequest {
        QuoteRequest::new(self.investment, self.term, self.principal)
    }
}

/// Builder for constructing reference tables
pub struct ReferenceTableBuilder {
    rows: Vec<ReferenceRow>,
}

impl Default for ReferenceTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceTableBuilder {
    /// Creates an empty builder
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Adds a single row
    pub fn with_row(
        mut self,
        investment: impl Into<String>,
        days: u32,
        multiplier: Decimal,
    ) -> Self {
        self.rows
            .push(ReferenceRow::new(investment, TermDays::new(days), multiplier));
        self
    }

    /// Adds a product offered at several terms with the same multiplier
    pub fn with_product(
        mut self,
        investment: impl Into<String>,
        days: &[u32],
        multiplier: Decimal,
    ) -> Self {
        let investment = investment.into();
        for &d in days {
            self.rows
                .push(ReferenceRow::new(investment.clone(), TermDays::new(d), multiplier));
        }
        self
    }

    /// Builds the reference table
    ///
    /// # Errors
    ///
    /// Propagates [`ReferenceTableError::DuplicateRow`] for colliding rows.
    pub fn build(self) -> Result<ReferenceTable, ReferenceTableError> {
        ReferenceTable::from_rows(self.rows)
    }
}
