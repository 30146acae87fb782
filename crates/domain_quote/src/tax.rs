//! Regressive withholding tax brackets
//!
//! Brazilian fixed-income gains are taxed at source on a regressive
//! schedule: the longer the holding period, the lower the rate. The
//! schedule is fixed by regulation and compiled into the binary.

use rust_decimal_macros::dec;
use serde::Serialize;

use core_kernel::Rate;

use crate::term::TermDays;

/// A withholding bracket
///
/// Holding periods strictly below `max_days_exclusive` pay `rate`; the
/// open-ended top bracket has no bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxBracket {
    /// Exclusive upper bound in days; `None` marks the open-ended bracket
    pub max_days_exclusive: Option<u32>,
    /// Withholding rate applied to the gross gain
    pub rate: Rate,
}

impl TaxBracket {
    /// Returns true if the holding period falls under this bracket's bound
    pub fn covers(&self, holding: TermDays) -> bool {
        match self.max_days_exclusive {
            Some(bound) => holding.days() < bound,
            None => true,
        }
    }
}

/// The regressive IR schedule, in ascending holding-period order
///
/// Public so presentation layers can render the full schedule next to a
/// quote.
pub const TAX_BRACKETS: [TaxBracket; 4] = [
    TaxBracket {
        max_days_exclusive: Some(181),
        rate: Rate::new(dec!(0.225)),
    },
    TaxBracket {
        max_days_exclusive: Some(361),
        rate: Rate::new(dec!(0.20)),
    },
    TaxBracket {
        max_days_exclusive: Some(721),
        rate: Rate::new(dec!(0.175)),
    },
    TaxBracket {
        max_days_exclusive: None,
        rate: Rate::new(dec!(0.15)),
    },
];

/// Resolves the withholding rate for a holding period
///
/// Total over all day counts: the first matching bracket wins and the
/// schedule ends with an open bracket.
pub fn withholding_rate(holding: TermDays) -> Rate {
    TAX_BRACKETS
        .iter()
        .find(|bracket| bracket.covers(holding))
        .unwrap_or(&TAX_BRACKETS[TAX_BRACKETS.len() - 1])
        .rate
}
