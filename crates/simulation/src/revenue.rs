//! Revenue projection.
//!
//! Revenue starts at a fixed ratio of the baseline expense total and grows
//! linearly by the configured rate each period before the sales growth lever is
//! applied.
//!
//! Arithmetic saturates at the decimal range so extreme inputs still produce a
//! series instead of overflowing.

use crate::config::EngineConfig;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

/// Unrounded revenue series for the forecast horizon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueProjection {
    /// First-period revenue before growth and levers.
    pub starting_base: Decimal,
    /// Organic series before the sales growth lever.
    pub baseline_series: Vec<Decimal>,
    /// Series after the sales growth lever.
    pub values: Vec<Decimal>,
}

impl RevenueProjection {
    /// Sum of the projected series.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.values
            .iter()
            .fold(Decimal::ZERO, |acc, value| acc.saturating_add(*value))
    }
}

/// Projects revenue over the configured horizon.
///
/// Increasing `sales_growth_multiplier` never decreases any period's value
/// for a non-negative expense base. No clamping is applied.
#[must_use]
pub fn project_revenue(
    base_expense_total: Decimal,
    sales_growth_multiplier: Decimal,
    config: &EngineConfig,
) -> RevenueProjection {
    let starting_base = base_expense_total.saturating_mul(config.revenue_to_expense_ratio);

    let baseline_series: Vec<Decimal> = (0..config.horizon_periods)
        .map(|i| {
            let growth = Decimal::ONE
                .saturating_add(config.period_growth_rate.saturating_mul(Decimal::from(i)));
            starting_base.saturating_mul(growth)
        })
        .collect();

    let values: Vec<Decimal> = baseline_series
        .iter()
        .map(|raw| raw.saturating_mul(sales_growth_multiplier))
        .collect();

    debug!(
        %starting_base,
        %sales_growth_multiplier,
        periods = values.len(),
        "projected revenue"
    );

    RevenueProjection {
        starting_base,
        baseline_series,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_neutral_projection() {
        let projection = project_revenue(dec!(50000), Decimal::ONE, &EngineConfig::default());

        assert_eq!(projection.starting_base, dec!(70000));
        assert_eq!(
            projection.values,
            vec![dec!(70000), dec!(72100), dec!(74200), dec!(76300)]
        );
        assert_eq!(projection.total(), dec!(292600));
    }

    #[test]
    fn test_sales_multiplier_scales_every_period() {
        let config = EngineConfig::default();
        let neutral = project_revenue(dec!(50000), Decimal::ONE, &config);
        let boosted = project_revenue(dec!(50000), dec!(1.2), &config);

        for (base, scaled) in neutral.values.iter().zip(&boosted.values) {
            assert_eq!(*scaled, base * dec!(1.2));
        }
        assert_eq!(boosted.baseline_series, neutral.baseline_series);
    }

    #[test]
    fn test_zero_expense_gives_zero_revenue() {
        let projection = project_revenue(Decimal::ZERO, dec!(1.3), &EngineConfig::default());
        assert!(projection.values.iter().all(|v| v.is_zero()));
    }

    #[test]
    fn test_negative_multiplier_is_not_clamped() {
        let projection = project_revenue(dec!(1000), dec!(-1), &EngineConfig::default());
        assert_eq!(projection.values[0], dec!(-1400));
    }

    #[test]
    fn test_huge_expense_saturates() {
        let projection = project_revenue(
            dec!(70000000000000000000000000000),
            dec!(3),
            &EngineConfig::default(),
        );

        assert!(projection.values.iter().all(|v| *v == Decimal::MAX));
        assert_eq!(projection.total(), Decimal::MAX);
    }

    #[test]
    fn test_custom_horizon() {
        let config = EngineConfig::default().with_horizon(6);
        let projection = project_revenue(dec!(1000), Decimal::ONE, &config);

        assert_eq!(projection.values.len(), 6);
        assert_eq!(projection.values[5], dec!(1610));
    }
}
