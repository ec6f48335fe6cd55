//! Baseline financial state.
//!
//! The baseline is the snapshot every scenario delta is measured against. It is
//! supplied by the caller on each simulation and never mutated by the engine.

use crate::error::ScenarioError;
use crate::numeric::finite_decimal;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Starting financial state for a simulation run.
///
/// Every field is required when deserializing; a missing field is a
/// construction error rather than a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineState {
    /// Current composite health score, expected in `[0, 100]`.
    pub base_health_score: Decimal,
    /// Expense total for a single period.
    pub base_expense_total: Decimal,
    /// Share of flagged transactions, as a percentage.
    pub fraud_rate_percent: Decimal,
    /// Cash on hand at the start of the horizon. May be negative.
    pub starting_cash: Decimal,
}

impl BaselineState {
    /// Creates a new baseline state.
    #[must_use]
    pub fn new(
        base_health_score: Decimal,
        base_expense_total: Decimal,
        fraud_rate_percent: Decimal,
        starting_cash: Decimal,
    ) -> Self {
        Self {
            base_health_score,
            base_expense_total,
            fraud_rate_percent,
            starting_cash,
        }
    }

    /// Creates a baseline from floating point inputs.
    ///
    /// # Errors
    /// Returns [`ScenarioError::NonFinite`] if any input is NaN, infinite or
    /// too large to be represented as a decimal.
    pub fn from_f64(
        base_health_score: f64,
        base_expense_total: f64,
        fraud_rate_percent: f64,
        starting_cash: f64,
    ) -> Result<Self, ScenarioError> {
        Ok(Self {
            base_health_score: finite_decimal(base_health_score, "base_health_score")?,
            base_expense_total: finite_decimal(base_expense_total, "base_expense_total")?,
            fraud_rate_percent: finite_decimal(fraud_rate_percent, "fraud_rate_percent")?,
            starting_cash: finite_decimal(starting_cash, "starting_cash")?,
        })
    }

    /// Baseline used when no business data has been collected yet.
    ///
    /// Health 70, no expenses, no fraud and a 100 000 cash buffer.
    ///
    /// Revenue is projected from the expense total, so with zero expenses
    /// every period forecasts zero revenue and cash stays at the buffer. No
    /// substitute revenue base is injected; supply a baseline with a real
    /// expense total for a non-flat forecast.
    #[must_use]
    pub fn synthetic() -> Self {
        Self {
            base_health_score: Decimal::from(70),
            base_expense_total: Decimal::ZERO,
            fraud_rate_percent: Decimal::ZERO,
            starting_cash: Decimal::from(100_000),
        }
    }
}

/// Raw business signals a baseline provider typically holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineSignals {
    /// Current composite health score.
    pub health_score: Decimal,
    /// Expense total for a single period.
    pub expense_total: Decimal,
    /// Number of transactions flagged as anomalous.
    pub anomalies_detected: u64,
    /// Number of transactions inspected.
    pub total_transactions: u64,
    /// Cash on hand.
    pub starting_cash: Decimal,
}

impl BaselineSignals {
    /// Fraud rate as a percentage of inspected transactions.
    ///
    /// Zero when no transactions were inspected.
    #[must_use]
    pub fn fraud_rate_percent(&self) -> Decimal {
        if self.total_transactions == 0 {
            return Decimal::ZERO;
        }
        Decimal::from(self.anomalies_detected) / Decimal::from(self.total_transactions)
            * Decimal::ONE_HUNDRED
    }

    /// Converts the raw signals into a baseline state.
    #[must_use]
    pub fn into_baseline(self) -> BaselineState {
        BaselineState {
            base_health_score: self.health_score,
            base_expense_total: self.expense_total,
            fraud_rate_percent: self.fraud_rate_percent(),
            starting_cash: self.starting_cash,
        }
    }
}

impl From<BaselineSignals> for BaselineState {
    fn from(signals: BaselineSignals) -> Self {
        signals.into_baseline()
    }
}
