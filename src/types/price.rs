//! Fixed-point price utilities.
//!
//! ## Overview
//!
//! Prices are stored as `u64` scaled by 10^8, so comparisons at the touch
//! (`>=` / `<=`) are exact and price levels can be keyed directly in an
//! ordered map. Quantities are plain integers and are never scaled.
//!
//! ## Examples
//!
//! ```
//! use limit_order_book::types::price::{to_fixed, from_fixed};
//!
//! let price = to_fixed("100.25").unwrap();
//! assert_eq!(price, 10_025_000_000);
//! assert_eq!(from_fixed(price), "100.25000000");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Scaling factor for fixed-point prices: 10^8
///
/// This provides 8 decimal places of precision.
pub const SCALE: u64 = 100_000_000;

/// Largest whole price that can be represented
pub const MAX_WHOLE_PRICE: u64 = u64::MAX / SCALE;

// ============================================================================
// Conversion Functions
// ============================================================================

/// Convert a decimal string to a fixed-point price
///
/// Returns `None` if the string does not parse, is negative, or overflows.
///
/// ```
/// use limit_order_book::types::price::to_fixed;
///
/// assert_eq!(to_fixed("1.0"), Some(100_000_000));
/// assert_eq!(to_fixed("0.00000001"), Some(1));
/// assert_eq!(to_fixed("-1"), None);
/// ```
pub fn to_fixed(s: &str) -> Option<u64> {
    let decimal = Decimal::from_str(s).ok()?;
    decimal_to_fixed(decimal)
}

/// Convert a Decimal to a fixed-point price
///
/// Digits beyond the 8th decimal place are rounded (banker's rounding).
/// Returns `None` for negative values or values out of range.
pub fn decimal_to_fixed(d: Decimal) -> Option<u64> {
    if d.is_sign_negative() {
        return None;
    }

    let scaled = d.checked_mul(Decimal::from(SCALE))?;
    scaled.round_dp(0).to_u64()
}

/// Convert a whole-unit price (e.g. `100`) to fixed-point
///
/// ```
/// use limit_order_book::types::price::{from_whole, SCALE};
///
/// assert_eq!(from_whole(100), Some(100 * SCALE));
/// assert_eq!(from_whole(u64::MAX), None);
/// ```
pub fn from_whole(units: u64) -> Option<u64> {
    units.checked_mul(SCALE)
}

/// Convert a fixed-point price to a Decimal
pub fn fixed_to_decimal(value: u64) -> Decimal {
    Decimal::from(value) / Decimal::from(SCALE)
}

/// Format a fixed-point price with all 8 decimal places
///
/// ```
/// use limit_order_book::types::price::from_fixed;
///
/// assert_eq!(from_fixed(100_000_000), "1.00000000");
/// ```
pub fn from_fixed(value: u64) -> String {
    format!("{:.8}", fixed_to_decimal(value))
}

/// Format a fixed-point price without trailing zeros
///
/// ```
/// use limit_order_book::types::price::from_fixed_trimmed;
///
/// assert_eq!(from_fixed_trimmed(10_000_000_000), "100");
/// assert_eq!(from_fixed_trimmed(150_000_000), "1.5");
/// ```
pub fn from_fixed_trimmed(value: u64) -> String {
    fixed_to_decimal(value).normalize().to_string()
}

// ============================================================================
// Unit Tests
// ============================================================================
