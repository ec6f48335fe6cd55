//! Error types for scenario construction and validation.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while building or validating scenario inputs.
///
/// The engine itself is total over its inputs; every variant here describes
/// a precondition the caller failed to meet.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    /// A floating point input was NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A lever value falls outside the accepted bounds.
    #[error("{lever} = {value} is outside the accepted range [{min}, {max}]")]
    OutOfBounds {
        /// Lever name.
        lever: &'static str,
        /// Submitted value.
        value: Decimal,
        /// Lower bound (inclusive).
        min: Decimal,
        /// Upper bound (inclusive).
        max: Decimal,
    },

    /// A sweep definition cannot be evaluated.
    #[error("invalid sweep: {0}")]
    InvalidSweep(String),

    /// A lever name did not match any known lever.
    #[error("unknown lever: {0}")]
    UnknownLever(String),

    /// The baseline provider could not supply a baseline.
    #[error("baseline unavailable: {0}")]
    Baseline(String),
}
