//! Quote orchestration
//!
//! This module wires the reference table, the future-value projection and
//! the withholding schedule into a single quoting operation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, instrument, warn};

use core_kernel::Money;

use crate::effective_annual_rate;
use crate::error::QuoteError;
use crate::future_value::future_value;
use crate::ports::{BenchmarkRate, BenchmarkRateProvider};
use crate::quote::{Quote, QuoteRequest};
use crate::reference::ReferenceTable;
use crate::tax::withholding_rate;

/// Computes investment quotes against a reference table
///
/// The service borrows the caller-owned table and keeps no other state,
/// so it is cheap to construct per use and safe to share across threads.
pub struct QuoteService<'a> {
    table: &'a ReferenceTable,
}

impl<'a> QuoteService<'a> {
    /// Creates a service over a reference table
    pub fn new(table: &'a ReferenceTable) -> Self {
        Self { table }
    }

    /// Computes a quote for a request against a benchmark rate
    ///
    /// This method:
    /// 1. Resolves the product multiplier from the reference table
    /// 2. Derives the effective annual rate from the benchmark
    /// 3. Projects the future value over the term
    /// 4. Applies the withholding bracket for the holding period
    ///
    /// # Errors
    ///
    /// - [`QuoteError::InvalidProduct`] if the (investment, term) pair is
    ///   not in the table
    /// - [`QuoteError::InvalidInput`] for a negative principal or an
    ///   effective rate at or below -100%
    #[instrument(skip(self, request), fields(investment = %request.investment, term = %request.term))]
    pub fn quote(
        &self,
        request: &QuoteRequest,
        benchmark: BenchmarkRate,
    ) -> Result<Quote, QuoteError> {
        if request.principal.is_negative() {
            return Err(QuoteError::invalid_input(
                "principal",
                "amount must not be negative",
            ));
        }

        let multiplier = match self.table.multiplier(&request.investment, request.term) {
            Ok(multiplier) => multiplier,
            Err(e) => {
                warn!("No reference rate for requested product");
                return Err(e);
            }
        };

        let annual_rate = effective_annual_rate(multiplier, benchmark);
        if annual_rate.as_decimal() <= dec!(-1) {
            return Err(QuoteError::invalid_input(
                "benchmark",
                "effective annual rate must exceed -100%",
            ));
        }

        let projected = future_value(
            annual_rate,
            request.term.periods(),
            Decimal::ZERO,
            request.principal.amount(),
        );

        let currency = request.principal.currency();
        let gross_future_value = Money::new(projected, currency);
        let gross_gain = gross_future_value.checked_sub(&request.principal)?;

        let tax_rate = withholding_rate(request.term);
        let net_gain = tax_rate.complement().apply(&gross_gain);
        let net_future_value = request.principal.checked_add(&net_gain)?;

        debug!(
            gross = %gross_future_value,
            net = %net_future_value,
            "Quote computed"
        );

        Ok(Quote {
            gross_future_value,
            gross_gain,
            tax_rate,
            net_gain,
            net_future_value,
        })
    }

    /// Pulls the latest benchmark rate from a provider, then quotes
    ///
    /// # Errors
    ///
    /// Provider failures surface as [`QuoteError::Benchmark`]; quoting
    /// errors are the same as [`QuoteService::quote`].
    pub fn quote_latest(
        &self,
        provider: &dyn BenchmarkRateProvider,
        request: &QuoteRequest,
    ) -> Result<Quote, QuoteError> {
        let benchmark = provider.latest()?;
        self.quote(request, benchmark)
    }
}
