//! Future value projection
//!
//! Compound-interest future value with an optional periodic payment
//! stream (ordinary annuity). All arithmetic is decimal; fractional
//! periods use `rust_decimal`'s mathematical power function.

use rust_decimal::{Decimal, MathematicalOps};

use core_kernel::Rate;

/// Projects the future value of a present value plus a periodic payment
///
/// Implements `pv * (1 + r)^n + pmt * (((1 + r)^n - 1) / r)` where `r` is
/// the per-period rate and `n` the (possibly fractional) number of
/// periods. A zero rate degenerates to the linear `pv + pmt * n`.
///
/// The growth factor `1 + r` must be positive for fractional exponents;
/// callers validate the rate before projecting.
///
/// # Example
///
/// ```rust
/// use domain_quote::future_value;
/// use core_kernel::Rate;
/// use rust_decimal_macros::dec;
///
/// let fv = future_value(Rate::new(dec!(0.12)), dec!(1), dec!(0), dec!(1000));
/// assert_eq!(fv.round_dp(2), dec!(1120.00));
/// ```
pub fn future_value(
    period_rate: Rate,
    periods: Decimal,
    periodic_payment: Decimal,
    present_value: Decimal,
) -> Decimal {
    if period_rate.is_zero() {
        return present_value + periodic_payment * periods;
    }

    let rate = period_rate.as_decimal();
    let growth = (Decimal::ONE + rate).powd(periods);

    present_value * growth + periodic_payment * ((growth - Decimal::ONE) / rate)
}
