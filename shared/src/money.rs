//! Money and quantity arithmetic using rust_decimal for precision
//!
//! Values travel as `f64` on the wire. All sums and products are done on
//! `Decimal` internally, then rounded back to `f64` for display and payloads.

use rust_decimal::prelude::*;

/// Decimal places for monetary values (half-away-from-zero)
pub const MONEY_PLACES: u32 = 2;

/// Decimal places for stock quantities (kg / l with gram precision)
pub const QUANTITY_PLACES: u32 = 3;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Convert f64 to Decimal for calculation
///
/// NaN/Infinity are logged and treated as zero so a single corrupt value
/// cannot poison a whole report.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    to_f64_dp(value, MONEY_PLACES)
}

/// Convert Decimal back to f64, rounded to `dp` decimal places
#[inline]
pub fn to_f64_dp(value: Decimal, dp: u32) -> f64 {
    value
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round a money value to cents
#[inline]
pub fn round_money(value: f64) -> f64 {
    to_f64(to_decimal(value))
}

/// Whether two money amounts are equal within [`MONEY_TOLERANCE`]
#[inline]
pub fn money_eq(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() < MONEY_TOLERANCE
}

/// Sum an iterator of f64 amounts without accumulating float error
pub fn sum_money<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    to_f64(values.into_iter().map(to_decimal).sum())
}

/// Apply a percentage discount to an amount: `amount * (100 - percent) / 100`
pub fn apply_discount(amount: f64, percent: f64) -> f64 {
    let pct = to_decimal(percent).clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    to_f64(to_decimal(amount) * (Decimal::ONE_HUNDRED - pct) / Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_precision() {
        let a = 0.1_f64;
        let b = 0.2_f64;
        assert_ne!(a + b, 0.3);
        assert_eq!(to_f64(to_decimal(a) + to_decimal(b)), 0.3);
    }

    #[test]
    fn test_accumulation_precision() {
        assert_eq!(sum_money(std::iter::repeat_n(0.01, 1000)), 10.0);
    }

    #[test]
    fn test_non_finite_is_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
    }

    #[test]
    fn test_quantity_rounding() {
        assert_eq!(to_f64_dp(to_decimal(1.23456), QUANTITY_PLACES), 1.235);
        assert_eq!(to_f64(Decimal::new(2345, 3)), 2.35);
    }

    #[test]
    fn test_money_eq_tolerance() {
        assert!(money_eq(to_decimal(10.0), to_decimal(10.005)));
        assert!(!money_eq(to_decimal(10.0), to_decimal(10.02)));
    }

    #[test]
    fn test_apply_discount() {
        assert_eq!(apply_discount(200.0, 15.0), 170.0);
        assert_eq!(apply_discount(99.99, 0.0), 99.99);
        assert_eq!(apply_discount(50.0, 150.0), 0.0);
    }
}
