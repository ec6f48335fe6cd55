//! Numeric conversion and rounding helpers.
//!
//! Reported metrics use banker's rounding (round half to even). One-decimal
//! metrics are normalised to a scale of exactly one so `75` is reported as
//! `75.0`.

use crate::error::ScenarioError;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// Converts a float into a decimal, rejecting NaN, infinities and values
/// outside the decimal range.
///
/// # Errors
/// Returns [`ScenarioError::NonFinite`] naming `field` on failure.
pub fn finite_decimal(value: f64, field: &'static str) -> Result<Decimal, ScenarioError> {
    if !value.is_finite() {
        return Err(ScenarioError::NonFinite { field });
    }
    Decimal::from_f64(value).ok_or(ScenarioError::NonFinite { field })
}

/// Rounds to one decimal place with a fixed scale of one.
#[must_use]
pub fn round_one_decimal(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp(1);
    rounded.rescale(1);
    rounded
}

/// Rounds to the nearest whole number.
#[must_use]
pub fn round_whole(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp(0);
    rounded.rescale(0);
    rounded
}
