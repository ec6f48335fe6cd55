//! Simulation result types.

use crate::baseline::BaselineState;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Projected revenue for one period of the horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenuePoint {
    /// Period label, `P1` for the first period.
    pub period: String,
    /// Projected revenue, rounded to a whole number.
    pub value: Decimal,
}

impl RevenuePoint {
    /// Creates a new revenue point.
    pub fn new(period: impl Into<String>, value: Decimal) -> Self {
        Self {
            period: period.into(),
            value,
        }
    }

    /// Label of the period at a zero-based index.
    #[must_use]
    pub fn label(index: usize) -> String {
        format!("P{}", index + 1)
    }
}

/// Forecast produced by one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Health score after applying the scenario, in `[0, 100]`, one decimal.
    pub new_health_score: Decimal,
    /// Movement of the health score relative to the baseline, one decimal.
    pub delta_from_base: Decimal,
    /// Cash at the end of the horizon, whole number.
    pub projected_cash: Decimal,
    /// Unified risk index, in `[0, 100]`, one decimal.
    pub risk_index: Decimal,
    /// Revenue per period.
    pub revenue_forecast: Vec<RevenuePoint>,
    /// Plain language rationale for the forecast.
    pub explanation_summary: String,
    /// Baseline the forecast was computed from.
    pub metadata: BaselineState,
}

impl SimulationResult {
    /// Total projected revenue over the horizon, from the rounded series.
    ///
    /// Saturates at the decimal range.
    #[must_use]
    pub fn total_revenue(&self) -> Decimal {
        self.revenue_forecast
            .iter()
            .fold(Decimal::ZERO, |acc, p| acc.saturating_add(p.value))
    }
}
