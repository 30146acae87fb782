//! Quote domain errors
//!
//! This module defines all error types that can occur within the
//! investment quote domain.

use thiserror::Error;

use crate::term::TermDays;
use core_kernel::MoneyError;

/// Errors that can occur while computing a quote
#[derive(Debug, Error)]
pub enum QuoteError {
    /// No reference rate is registered for the requested product and term
    #[error("No reference rate registered for {investment} at {term}")]
    InvalidProduct {
        investment: String,
        term: TermDays,
    },

    /// A caller-supplied field failed validation
    #[error("Invalid {field}: {message}")]
    InvalidInput {
        field: String,
        message: String,
    },

    /// The benchmark rate provider failed
    #[error("Benchmark rate unavailable: {source}")]
    Benchmark {
        #[from]
        source: BenchmarkError,
    },

    /// Monetary arithmetic error
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}

impl QuoteError {
    /// Creates an invalid input error
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        QuoteError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid product error
    pub fn invalid_product(investment: impl Into<String>, term: TermDays) -> Self {
        QuoteError::InvalidProduct {
            investment: investment.into(),
            term,
        }
    }
}

/// Errors that can occur while building a reference table
#[derive(Debug, Error)]
pub enum ReferenceTableError {
    /// Two rows share the same (investment, term) key
    #[error("Duplicate reference row for {investment} at {term}")]
    DuplicateRow {
        investment: String,
        term: TermDays,
    },
}

/// Errors reported by benchmark rate providers
#[derive(Debug, Error)]
pub enum BenchmarkError {
    /// The upstream rate series could not be read
    #[error("{source_name}: {message}")]
    Unavailable {
        source_name: String,
        message: String,
    },
}

impl BenchmarkError {
    /// Creates an unavailable error with source context
    pub fn unavailable(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        BenchmarkError::Unavailable {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}
