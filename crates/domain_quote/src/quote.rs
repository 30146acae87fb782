//! Quote value objects
//!
//! A quote is the immutable result of a simulation: the projected gross
//! value at maturity, the withholding rate for the holding period, and
//! the net figures after tax.

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Currency, Money, Rate};

use crate::error::QuoteError;
use crate::term::TermDays;

/// A request for an investment quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Product name as it appears in the reference table
    pub investment: String,
    /// Term, doubling as the holding period
    pub term: TermDays,
    /// Amount invested today
    pub principal: Money,
}

impl QuoteRequest {
    /// Creates a request from already-typed values
    pub fn new(investment: impl Into<String>, term: TermDays, principal: Money) -> Self {
        Self {
            investment: investment.into(),
            term,
            principal,
        }
    }

    /// Parses a request from user-entered text
    ///
    /// Term labels like `"360 dias"` and principal amounts with either
    /// decimal separator (`"1000.50"`, `"1000,50"`) are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidInput`] naming the offending field.
    pub fn parse(
        investment: &str,
        term_text: &str,
        principal_text: &str,
        currency: Currency,
    ) -> Result<Self, QuoteError> {
        let investment = investment.trim();
        if investment.is_empty() {
            return Err(QuoteError::invalid_input(
                "investment",
                "name must not be empty",
            ));
        }

        let term: TermDays = term_text.parse()?;
        let principal = Money::parse(principal_text, currency)
            .map_err(|e| QuoteError::invalid_input("principal", e.to_string()))?;

        Ok(Self::new(investment, term, principal))
    }
}

/// An immutable investment quote
///
/// All monetary fields keep full internal precision; use
/// [`Quote::rounded`] for presentation. The quote carries no identifiers
/// or timestamps, so identical inputs always produce identical quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Projected value at maturity before tax
    pub gross_future_value: Money,
    /// Gross gain over the principal
    pub gross_gain: Money,
    /// Withholding rate for the holding period
    pub tax_rate: Rate,
    /// Gain after withholding
    pub net_gain: Money,
    /// Principal plus net gain
    pub net_future_value: Money,
}

impl Quote {
    /// Returns a presentation copy rounded to currency precision
    pub fn rounded(&self) -> Quote {
        Quote {
            gross_future_value: self.gross_future_value.round_to_currency(),
            gross_gain: self.gross_gain.round_to_currency(),
            tax_rate: self.tax_rate,
            net_gain: self.net_gain.round_to_currency(),
            net_future_value: self.net_future_value.round_to_currency(),
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.rounded();
        writeln!(f, "Future value: {}", rounded.gross_future_value)?;
        writeln!(f, "Gross gain: {}", rounded.gross_gain)?;
        writeln!(f, "Net gain: {}", rounded.net_gain)?;
        write!(f, "Tax rate: {}", rounded.tax_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_request() {
        let request =
            QuoteRequest::parse("CDB Banco Alfa", "360 dias", "1500,75", Currency::BRL).unwrap();

        assert_eq!(request.investment, "CDB Banco Alfa");
        assert_eq!(request.term, TermDays::new(360));
        assert_eq!(request.principal, Money::new(dec!(1500.75), Currency::BRL));
    }

    #[test]
    fn test_parse_rejects_empty_investment() {
        let result = QuoteRequest::parse("  ", "360", "1000", Currency::BRL);
        assert!(matches!(result, Err(QuoteError::InvalidInput { .. })));
    }

    #[test]
    fn test_parse_rejects_bad_term() {
        let result = QuoteRequest::parse("CDB", "um ano", "1000", Currency::BRL);
        assert!(matches!(
            result,
            Err(QuoteError::InvalidInput { ref field, .. }) if field == "term"
        ));
    }

    #[test]
    fn test_parse_rejects_bad_principal() {
        let result = QuoteRequest::parse("CDB", "360", "mil", Currency::BRL);
        assert!(matches!(
            result,
            Err(QuoteError::InvalidInput { ref field, .. }) if field == "principal"
        ));
    }

    #[test]
    fn test_rounded_quote() {
        let quote = Quote {
            gross_future_value: Money::new(dec!(1120.4567), Currency::BRL),
            gross_gain: Money::new(dec!(120.4567), Currency::BRL),
            tax_rate: Rate::new(dec!(0.175)),
            net_gain: Money::new(dec!(99.3768), Currency::BRL),
            net_future_value: Money::new(dec!(1099.3768), Currency::BRL),
        };

        let rounded = quote.rounded();
        assert_eq!(rounded.gross_future_value.amount(), dec!(1120.46));
        assert_eq!(rounded.gross_gain.amount(), dec!(120.46));
        assert_eq!(rounded.net_gain.amount(), dec!(99.38));
        assert_eq!(rounded.net_future_value.amount(), dec!(1099.38));
    }

    #[test]
    fn test_display_result_block() {
        let quote = Quote {
            gross_future_value: Money::new(dec!(1120), Currency::BRL),
            gross_gain: Money::new(dec!(120), Currency::BRL),
            tax_rate: Rate::new(dec!(0.175)),
            net_gain: Money::new(dec!(99), Currency::BRL),
            net_future_value: Money::new(dec!(1099), Currency::BRL),
        };

        let rendered = quote.to_string();
        assert_eq!(
            rendered,
            "Future value: R$ 1120.00\nGross gain: R$ 120.00\nNet gain: R$ 99.00\nTax rate: 17.5%"
        );
    }
}
