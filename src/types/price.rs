//! Fixed-point price utilities.
//!
//! ## Overview
//!
//! The engine compares prices as opaque `u128` integers. Hosts that quote
//! human-readable decimals convert at the edge with these helpers, which
//! scale by 10^8 and never touch floating point.
//!
//! ## Examples
//!
//! ```
//! use pair_book::types::price::{from_fixed, to_fixed};
//!
//! let price = to_fixed("50000.12345678").unwrap();
//! assert_eq!(price, 5_000_012_345_678);
//! assert_eq!(from_fixed(price), "50000.12345678");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Scaling factor for fixed-point prices: 10^8
pub const SCALE: u128 = 100_000_000;

/// Decimal places implied by [`SCALE`]
pub const SCALE_DIGITS: u32 = 8;

// ============================================================================
// Conversion Functions
// ============================================================================

/// Convert a decimal string to a fixed-point price
///
/// # Returns
///
/// * `Some(u128)` - The fixed-point representation
/// * `None` - If parsing fails or the value is negative
///
/// ```
/// use pair_book::types::price::to_fixed;
///
/// assert_eq!(to_fixed("1.0"), Some(100_000_000));
/// assert_eq!(to_fixed("0.00000001"), Some(1));
/// assert_eq!(to_fixed("-3"), None);
/// ```
pub fn to_fixed(s: &str) -> Option<u128> {
    let decimal = Decimal::from_str(s).ok()?;
    decimal_to_fixed(decimal)
}

/// Convert a Decimal to a fixed-point price, rounding to 8 places
pub fn decimal_to_fixed(d: Decimal) -> Option<u128> {
    if d.is_sign_negative() && !d.is_zero() {
        return None;
    }

    let scaled = d.checked_mul(Decimal::from(SCALE as u64))?;
    scaled.round_dp(0).to_u128()
}

/// Convert a fixed-point price to a Decimal.
///
/// Returns `None` when the value exceeds Decimal's 96-bit mantissa.
pub fn fixed_to_decimal(value: u128) -> Option<Decimal> {
    let raw = i128::try_from(value).ok()?;
    Decimal::try_from_i128_with_scale(raw, SCALE_DIGITS).ok()
}

/// Format a fixed-point price with exactly 8 decimal places
///
/// ```
/// use pair_book::types::price::from_fixed;
///
/// assert_eq!(from_fixed(100_000_000), "1.00000000");
/// assert_eq!(from_fixed(u128::MAX).len(), 40);
/// ```
pub fn from_fixed(value: u128) -> String {
    match fixed_to_decimal(value) {
        Some(decimal) => format!("{:.8}", decimal),
        // Past Decimal's range; integer formatting is exact
        None => format!("{}.{:08}", value / SCALE, value % SCALE),
    }
}

/// Format a fixed-point price with trailing zeros trimmed
///
/// ```
/// use pair_book::types::price::from_fixed_trimmed;
///
/// assert_eq!(from_fixed_trimmed(100_000_000), "1");
/// assert_eq!(from_fixed_trimmed(150_000_000), "1.5");
/// ```
pub fn from_fixed_trimmed(value: u128) -> String {
    match fixed_to_decimal(value) {
        Some(decimal) => decimal.normalize().to_string(),
        None => {
            let full = from_fixed(value);
            full.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_constant() {
        assert_eq!(SCALE, 10u128.pow(SCALE_DIGITS));
    }

    #[test]
    fn test_to_fixed_basic() {
        assert_eq!(to_fixed("1"), Some(100_000_000));
        assert_eq!(to_fixed("0.5"), Some(50_000_000));
        assert_eq!(to_fixed("800"), Some(80_000_000_000));
        assert_eq!(to_fixed("50000.12345678"), Some(5_000_012_345_678));
    }

    #[test]
    fn test_to_fixed_edge_cases() {
        assert_eq!(to_fixed("0"), Some(0));
        assert_eq!(to_fixed("0.0"), Some(0));
        assert_eq!(to_fixed("-1.0"), None);
        assert_eq!(to_fixed("abc"), None);
        assert_eq!(to_fixed(""), None);
    }

    #[test]
    fn test_to_fixed_rounds_extra_precision() {
        // 9th decimal place rounds away
        assert_eq!(to_fixed("0.000000014"), Some(1));
        assert_eq!(to_fixed("0.000000016"), Some(2));
    }

    #[test]
    fn test_from_fixed() {
        assert_eq!(from_fixed(0), "0.00000000");
        assert_eq!(from_fixed(1), "0.00000001");
        assert_eq!(from_fixed(5_000_012_345_678), "50000.12345678");
    }

    #[test]
    fn test_from_fixed_beyond_decimal_range() {
        let value = u128::MAX;
        assert_eq!(
            from_fixed(value),
            format!("{}.{:08}", value / SCALE, value % SCALE)
        );
        assert!(fixed_to_decimal(value).is_none());
    }

    #[test]
    fn test_from_fixed_trimmed() {
        assert_eq!(from_fixed_trimmed(123_456_789), "1.23456789");
        assert_eq!(from_fixed_trimmed(80_000_000_000), "800");
        assert_eq!(from_fixed_trimmed(0), "0");
    }

    #[test]
    fn test_precision_is_preserved() {
        let value = "123456789.12345678";
        let fixed = to_fixed(value).unwrap();
        assert_eq!(from_fixed(fixed), value);
    }
}
