//! Investment Quote Domain
//!
//! This crate implements the quote kernel for Brazilian-style fixed-income
//! products: reference rate lookup, compound future-value projection, and
//! the regressive withholding-tax schedule.
//!
//! # Key Concepts
//!
//! - **Reference table**: per-(investment, term) CDI multipliers
//! - **Benchmark rate**: externally supplied annual percentage (Selic/CDI)
//! - **Effective rate**: multiplier × benchmark, as a fraction
//! - **Gross / net**: before / after withholding tax
//!
//! # Quoting
//!
//! ```rust
//! use core_kernel::{Currency, Money};
//! use domain_quote::{
//!     BenchmarkRate, QuoteRequest, QuoteService, ReferenceRow, ReferenceTable, TermDays,
//! };
//! use rust_decimal_macros::dec;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = ReferenceTable::from_rows(vec![ReferenceRow::new(
//!     "CDB Banco Alfa",
//!     TermDays::new(365),
//!     dec!(1.0),
//! )])?;
//!
//! let service = QuoteService::new(&table);
//! let request = QuoteRequest::new(
//!     "CDB Banco Alfa",
//!     TermDays::new(365),
//!     Money::new(dec!(1000), Currency::BRL),
//! );
//!
//! let quote = service.quote(&request, BenchmarkRate::from_annual_percentage(dec!(12)))?;
//! assert_eq!(quote.rounded().net_gain.amount(), dec!(99.00));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod term;
pub mod reference;
pub mod tax;
pub mod future_value;
pub mod quote;
pub mod service;
pub mod ports;

pub use error::{BenchmarkError, QuoteError, ReferenceTableError};
pub use term::TermDays;
pub use reference::{ReferenceRow, ReferenceTable};
pub use tax::{withholding_rate, TaxBracket, TAX_BRACKETS};
pub use future_value::future_value;
pub use quote::{Quote, QuoteRequest};
pub use service::QuoteService;
pub use ports::{BenchmarkRate, BenchmarkRateProvider, FixedBenchmarkRate};

use rust_decimal::Decimal;

use core_kernel::Rate;

/// Days per year used for period conversion
pub const DAYS_PER_YEAR: u32 = 365;

/// Derives the effective annual rate from a product multiplier and benchmark
///
/// A product paying "110% of CDI" with CDI at 12% p.a. yields
/// `1.10 * 12 / 100 = 0.132`.
///
/// # Example
///
/// ```rust
/// use domain_quote::{effective_annual_rate, BenchmarkRate};
/// use rust_decimal_macros::dec;
///
/// let rate = effective_annual_rate(dec!(1.10), BenchmarkRate::from_annual_percentage(dec!(12)));
/// assert_eq!(rate.as_decimal(), dec!(0.132));
/// ```
pub fn effective_annual_rate(cdi_multiplier: Decimal, benchmark: BenchmarkRate) -> Rate {
    Rate::new(cdi_multiplier * benchmark.annual_percentage() / Decimal::from(100))
}
