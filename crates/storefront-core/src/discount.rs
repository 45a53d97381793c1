//! Discount Calculator
//!
//! Percentage reduction from list price to sale price, rounded to a whole
//! percent for the "NN% OFF" badge.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Percentage reduction from `original` to `discounted`.
///
/// Computes `round(((original - discounted) / original) * 100)`, with halves
/// rounded up toward positive infinity. Returns `None` when `original` is not
/// positive, or when the ratio overflows `Decimal`. The result is negative
/// when `discounted > original`; callers should read that as "no discount".
pub fn calculate_discount(original: Decimal, discounted: Decimal) -> Option<i64> {
    if original <= Decimal::ZERO {
        return None;
    }

    let percent = original
        .checked_sub(discounted)?
        .checked_div(original)?
        .checked_mul(dec!(100))?;
    percent.checked_add(dec!(0.5))?.floor().to_i64()
}
