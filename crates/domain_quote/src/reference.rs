//! Reference rate tables
//!
//! This module holds the per-product rate multipliers. Each row pairs an
//! investment name and a term with the fraction of the benchmark rate the
//! product pays. Loading the rows from a spreadsheet export or any other
//! tabular source is the caller's concern; the table performs no I/O.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{QuoteError, ReferenceTableError};
use crate::term::TermDays;

/// One reference row: the CDI multiplier offered for an investment at a term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRow {
    /// Product name, e.g. "CDB Banco Alfa"
    pub investment: String,
    /// Offered term
    pub term: TermDays,
    /// Fraction of the benchmark the product pays, e.g. 1.10 for 110% of CDI
    pub cdi_multiplier: Decimal,
}

impl ReferenceRow {
    /// Creates a new reference row
    pub fn new(investment: impl Into<String>, term: TermDays, cdi_multiplier: Decimal) -> Self {
        Self {
            investment: investment.into(),
            term,
            cdi_multiplier,
        }
    }
}

/// Read-only collection of reference rows keyed by (investment, term)
///
/// The table is immutable after construction and holds exactly one
/// multiplier per key; duplicate rows are rejected up front. Iteration
/// order is deterministic (investments alphabetically, terms ascending).
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTable {
    rates: BTreeMap<String, BTreeMap<TermDays, Decimal>>,
}

impl ReferenceTable {
    /// Builds a table from rows
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceTableError::DuplicateRow`] if two rows share the
    /// same (investment, term) key.
    pub fn from_rows(rows: Vec<ReferenceRow>) -> Result<Self, ReferenceTableError> {
        let mut rates: BTreeMap<String, BTreeMap<TermDays, Decimal>> = BTreeMap::new();

        for row in rows {
            let terms = rates.entry(row.investment.clone()).or_default();
            if terms.insert(row.term, row.cdi_multiplier).is_some() {
                return Err(ReferenceTableError::DuplicateRow {
                    investment: row.investment,
                    term: row.term,
                });
            }
        }

        Ok(Self { rates })
    }

    /// Looks up the multiplier for an investment at a term
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidProduct`] if the pair is not in the table.
    pub fn multiplier(&self, investment: &str, term: TermDays) -> Result<Decimal, QuoteError> {
        self.rates
            .get(investment)
            .and_then(|terms| terms.get(&term))
            .copied()
            .ok_or_else(|| QuoteError::invalid_product(investment, term))
    }

    /// Lists the distinct investment names in alphabetical order
    pub fn investments(&self) -> Vec<&str> {
        self.rates.keys().map(String::as_str).collect()
    }

    /// Lists the terms offered for an investment in ascending order
    ///
    /// Returns an empty list for unknown investments.
    pub fn terms_for(&self, investment: &str) -> Vec<TermDays> {
        self.rates
            .get(investment)
            .map(|terms| terms.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Returns the number of rows in the table
    pub fn len(&self) -> usize {
        self.rates.values().map(BTreeMap::len).sum()
    }

    /// Returns true if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterates over the rows in deterministic order
    pub fn iter(&self) -> impl Iterator<Item = ReferenceRow> + '_ {
        self.rates.iter().flat_map(|(investment, terms)| {
            terms.iter().map(move |(term, multiplier)| ReferenceRow {
                investment: investment.clone(),
                term: *term,
                cdi_multiplier: *multiplier,
            })
        })
    }
}
