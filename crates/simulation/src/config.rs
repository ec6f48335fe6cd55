//! Engine configuration.
//!
//! Every coefficient used by the projectors and composers lives here. The
//! default configuration is the standard calibration; alternative
//! calibrations can be built with the `with_*` setters.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Coefficients of the scenario model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Ratio of first-period revenue to the baseline expense total.
    pub revenue_to_expense_ratio: Decimal,
    /// Organic revenue growth added per period (linear, not compounded).
    pub period_growth_rate: Decimal,
    /// Number of periods in the forecast horizon.
    pub horizon_periods: usize,
    /// Weight of the fraud rate in the risk index.
    pub fraud_weight: Decimal,
    /// Risk points per unit of supplier delay above neutral.
    pub supplier_delay_risk_weight: Decimal,
    /// Risk points per unit of reorder threshold above neutral.
    pub reorder_risk_weight: Decimal,
    /// Risk points per unit of expense growth above neutral.
    pub expense_risk_weight: Decimal,
    /// Health points per unit of sales growth in excess of expense growth.
    pub revenue_vs_expense_weight: Decimal,
    /// Risk index at which risk neither helps nor hurts health.
    pub risk_reference: Decimal,
    /// Risk points that cost one health point.
    pub risk_divisor: Decimal,
    /// Health points lost per unit of supplier delay above neutral.
    pub supplier_health_weight: Decimal,
    /// Lower bound of the health score and risk index.
    pub score_floor: Decimal,
    /// Upper bound of the health score and risk index.
    pub score_ceiling: Decimal,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            revenue_to_expense_ratio: Decimal::new(14, 1),  // 1.4
            period_growth_rate: Decimal::new(3, 2),         // 3%
            horizon_periods: 4,
            fraud_weight: Decimal::new(6, 1),               // 0.6
            supplier_delay_risk_weight: Decimal::from(40),
            reorder_risk_weight: Decimal::from(25),
            expense_risk_weight: Decimal::from(60),
            revenue_vs_expense_weight: Decimal::from(18),
            risk_reference: Decimal::from(40),
            risk_divisor: Decimal::new(45, 1),              // 4.5
            supplier_health_weight: Decimal::from(10),
            score_floor: Decimal::ZERO,
            score_ceiling: Decimal::ONE_HUNDRED,
        }
    }
}

impl EngineConfig {
    /// Sets the revenue to expense ratio.
    #[must_use]
    pub fn with_revenue_to_expense_ratio(mut self, ratio: Decimal) -> Self {
        self.revenue_to_expense_ratio = ratio;
        self
    }

    /// Sets the per-period organic growth rate.
    #[must_use]
    pub fn with_period_growth_rate(mut self, rate: Decimal) -> Self {
        self.period_growth_rate = rate;
        self
    }

    /// Sets the number of forecast periods.
    #[must_use]
    pub fn with_horizon(mut self, periods: usize) -> Self {
        self.horizon_periods = periods;
        self
    }

    /// Sets the fraud weight of the risk index.
    #[must_use]
    pub fn with_fraud_weight(mut self, weight: Decimal) -> Self {
        self.fraud_weight = weight;
        self
    }

    /// Sets the neutral risk reference used by the health composer.
    #[must_use]
    pub fn with_risk_reference(mut self, reference: Decimal) -> Self {
        self.risk_reference = reference;
        self
    }

    /// Clamps a score into the configured bounds.
    #[must_use]
    pub fn clamp_score(&self, value: Decimal) -> Decimal {
        value.max(self.score_floor).min(self.score_ceiling)
    }

    /// Horizon length as a decimal multiplier.
    #[must_use]
    pub fn horizon(&self) -> Decimal {
        Decimal::from(self.horizon_periods)
    }
}
