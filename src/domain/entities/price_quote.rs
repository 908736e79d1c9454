//! Discounted price quote, computed per request and never stored.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use uuid::Uuid;

/// Number of decimal places kept in a quoted price.
pub const PRICE_SCALE: u32 = 2;

/// Every `f64` at or above this magnitude is an integer.
const INTEGRAL_F64_THRESHOLD: f64 = 9_007_199_254_740_992.0;

/// Result of applying a discount fraction to a book's stored price.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub book_id: Uuid,
    pub original_price: f64,
    /// Fraction in `[0, 1)` returned by the pricing oracle.
    pub discount_pct: f64,
    /// `original_price * (1 - discount_pct)`, rounded half-up to two places.
    pub final_price: f64,
}

impl PriceQuote {
    /// Builds a quote for `original_price` discounted by `discount_pct`.
    ///
    /// Returns `None` if the discounted price cannot be represented
    /// (non-finite input).
    pub fn new(book_id: Uuid, original_price: f64, discount_pct: f64) -> Option<Self> {
        let final_price = round_half_up(original_price * (1.0 - discount_pct), PRICE_SCALE)?;

        Some(Self {
            book_id,
            original_price,
            discount_pct,
            final_price,
        })
    }
}

/// Rounds `value` to `scale` decimal places, ties away from zero.
///
/// The float is first taken at its shortest decimal representation, so
/// `2.675` rounds to `2.68` even though its binary value is slightly below.
/// Magnitudes of 2^53 and above carry no fractional part and are returned
/// unchanged.
pub fn round_half_up(value: f64, scale: u32) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    if value.abs() >= INTEGRAL_F64_THRESHOLD {
        return Some(value);
    }

    Decimal::from_str(&value.to_string())
        .ok()?
        .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
}
