//! Money calculation utilities using rust_decimal for precision
//!
//! All calculations are done using `Decimal` internally, then converted to
//! `f64` for storage/serialization. Monetary values are rounded to 2 decimal
//! places with half-up rounding; comparisons use a 0.01 tolerance.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round a monetary value to 2 decimal places (half-up)
#[inline]
pub fn round_currency(value: f64) -> f64 {
    to_f64(to_decimal(value))
}

/// Calculate a line total with precise decimal arithmetic
///
/// Formula: unit_price * quantity
pub fn line_total(unit_price: f64, quantity: i32) -> f64 {
    to_f64(to_decimal(unit_price) * Decimal::from(quantity))
}

/// Sum monetary amounts with precise arithmetic
pub fn sum(amounts: impl IntoIterator<Item = f64>) -> f64 {
    let total: Decimal = amounts.into_iter().map(to_decimal).sum();
    to_f64(total)
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}

/// Check if a cumulative paid amount settles the required total
///
/// Returns true if paid >= required - 0.01
pub fn is_settled(paid: f64, required: f64) -> bool {
    let paid_dec = to_decimal(paid);
    let required_dec = to_decimal(required);
    paid_dec >= required_dec - MONEY_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_precision() {
        // Classic floating point problem: 0.1 + 0.2 != 0.3
        let a = 0.1_f64;
        let b = 0.2_f64;
        let sum_f64 = a + b;

        // f64 fails
        assert_ne!(sum_f64, 0.3);

        // Decimal succeeds
        let sum_dec = to_decimal(a) + to_decimal(b);
        assert_eq!(to_f64(sum_dec), 0.3);
    }

    #[test]
    fn test_accumulation_precision() {
        // Sum 0.01 one thousand times
        let total = sum(std::iter::repeat(0.01).take(1000));
        assert_eq!(total, 10.0);
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line_total(10.99, 3), 32.97);
        assert_eq!(line_total(50.0, 2), 100.0);
        assert_eq!(line_total(0.0, 5), 0.0);
    }

    #[test]
    fn test_order_total_two_items() {
        // product A price 50.00 qty 2, product B price 30.00 qty 1
        let total = sum([line_total(50.0, 2), line_total(30.0, 1)]);
        assert_eq!(total, 130.0);
    }

    #[test]
    fn test_rounding_half_up() {
        // 0.005 should round up to 0.01
        let value = Decimal::new(5, 3);
        let rounded = to_f64(value);
        assert_eq!(rounded, 0.01);

        // 0.004 should round down to 0.00
        let value2 = Decimal::new(4, 3);
        let rounded2 = to_f64(value2);
        assert_eq!(rounded2, 0.0);
    }

    #[test]
    fn test_money_eq() {
        assert!(money_eq(100.0, 100.0));
        assert!(money_eq(100.004, 100.006));
        assert!(!money_eq(100.0, 100.02));
    }

    #[test]
    fn test_is_settled() {
        assert!(is_settled(100.0, 100.0));
        assert!(is_settled(100.01, 100.0));
        assert!(is_settled(99.995, 100.0)); // Within tolerance
        assert!(!is_settled(99.98, 100.0)); // Outside tolerance
        assert!(!is_settled(120.0, 200.0));
    }

    #[test]
    fn test_to_decimal_nan_becomes_zero() {
        // NaN is rejected by Decimal::from_f64, unwrap_or_default yields 0
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
        assert_eq!(to_decimal(f64::NEG_INFINITY), Decimal::ZERO);
    }

    #[test]
    fn test_round_currency() {
        assert_eq!(round_currency(130.005), 130.01);
        assert_eq!(round_currency(130.004), 130.0);
        assert_eq!(round_currency(130.0), 130.0);
    }
}
