//! Composite health score.
//!
//! The new score is the baseline nudged by three deltas: sales growth in excess
//! of expense growth, distance of the risk index from its reference point, and
//! supplier delays. The reported delta is measured after clamping, so it
//! reflects the movement that actually happened within the score bounds.
//!
//! A scenario with every lever exactly at neutral is the baseline itself and
//! reports it unchanged. Any other scenario goes through the full formula, so
//! moving a single lever off neutral by a hair also applies the risk reference
//! term.

use crate::config::EngineConfig;
use crate::risk::excess;
use rust_decimal::Decimal;
use scenario_domain::{BaselineState, ScenarioParameters};
use serde::Serialize;
use tracing::debug;

/// Components of the health score adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthBreakdown {
    /// Contribution of sales growth relative to expense growth.
    pub revenue_vs_expense_delta: Decimal,
    /// Contribution of the risk index relative to its reference.
    pub risk_delta: Decimal,
    /// Contribution of supplier delays.
    pub supplier_delta: Decimal,
    /// Sum of the deltas before clamping.
    pub health_delta: Decimal,
    /// Clamped health score, unrounded.
    pub new_health_score: Decimal,
    /// Clamped score minus baseline score, unrounded.
    pub delta_from_base: Decimal,
}

/// Derives the new health score from the baseline and the risk index.
#[must_use]
pub fn compose_health(
    baseline: &BaselineState,
    params: &ScenarioParameters,
    risk_index: Decimal,
    config: &EngineConfig,
) -> HealthBreakdown {
    let base = baseline.base_health_score;

    if params.is_neutral() {
        debug!(%base, "neutral scenario, health unchanged");
        let new_health_score = config.clamp_score(base);
        return HealthBreakdown {
            revenue_vs_expense_delta: Decimal::ZERO,
            risk_delta: Decimal::ZERO,
            supplier_delta: Decimal::ZERO,
            health_delta: Decimal::ZERO,
            new_health_score,
            delta_from_base: new_health_score.saturating_sub(base),
        };
    }

    let revenue_vs_expense_delta = params
        .sales_growth_multiplier
        .saturating_sub(params.expense_growth_multiplier)
        .saturating_mul(config.revenue_vs_expense_weight);

    let risk_delta = risk_index
        .saturating_sub(config.risk_reference)
        .checked_div(config.risk_divisor)
        .map_or(Decimal::ZERO, |delta| -delta);

    let supplier_delta =
        -excess(params.supplier_delay_factor).saturating_mul(config.supplier_health_weight);

    let health_delta = revenue_vs_expense_delta
        .saturating_add(risk_delta)
        .saturating_add(supplier_delta);
    let new_health_score = config.clamp_score(base.saturating_add(health_delta));
    let delta_from_base = new_health_score.saturating_sub(base);

    debug!(
        %revenue_vs_expense_delta,
        %risk_delta,
        %supplier_delta,
        %health_delta,
        %new_health_score,
        "composed health"
    );

    HealthBreakdown {
        revenue_vs_expense_delta,
        risk_delta,
        supplier_delta,
        health_delta,
        new_health_score,
        delta_from_base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn baseline(health: Decimal) -> BaselineState {
        BaselineState::new(health, dec!(50000), dec!(10), dec!(100000))
    }

    #[test]
    fn test_neutral_keeps_baseline() {
        let health = compose_health(
            &baseline(dec!(75)),
            &ScenarioParameters::neutral(),
            dec!(6),
            &EngineConfig::default(),
        );

        assert_eq!(health.new_health_score, dec!(75));
        assert_eq!(health.delta_from_base, Decimal::ZERO);
        assert_eq!(health.health_delta, Decimal::ZERO);
    }

    #[test]
    fn test_just_off_neutral_applies_formula() {
        let config = EngineConfig::default();
        let neutral = compose_health(
            &baseline(dec!(75)),
            &ScenarioParameters::neutral(),
            dec!(6),
            &config,
        );
        let nudged = compose_health(
            &baseline(dec!(75)),
            &ScenarioParameters::neutral().with_fraud_sensitivity(dec!(1.01)),
            dec!(6.06),
            &config,
        );

        assert_eq!(neutral.new_health_score, dec!(75));
        // 75 + 33.94 / 4.5
        assert_eq!(nudged.new_health_score.round_dp(1), dec!(82.5));
        assert_eq!(nudged.risk_delta.round_dp(2), dec!(7.54));
    }

    #[test]
    fn test_neutral_clamps_out_of_range_baseline() {
        let health = compose_health(
            &baseline(dec!(120)),
            &ScenarioParameters::neutral(),
            dec!(6),
            &EngineConfig::default(),
        );

        assert_eq!(health.new_health_score, dec!(100));
        assert_eq!(health.delta_from_base, dec!(-20));
    }

    #[test]
    fn test_sales_growth_lifts_health() {
        let params = ScenarioParameters::neutral().with_sales_growth(dec!(1.2));
        let health = compose_health(&baseline(dec!(75)), &params, dec!(6), &EngineConfig::default());

        assert_eq!(health.revenue_vs_expense_delta, dec!(3.6));
        assert_eq!(health.supplier_delta, Decimal::ZERO);
        // 75 + 3.6 + 34 / 4.5
        assert_eq!(health.new_health_score.round_dp(1), dec!(86.2));
        assert_eq!(health.delta_from_base.round_dp(1), dec!(11.2));
    }

    #[test]
    fn test_risk_above_reference_drags_health() {
        let params = ScenarioParameters::neutral().with_expense_growth(dec!(1.3));
        let health = compose_health(&baseline(dec!(75)), &params, dec!(85), &EngineConfig::default());

        assert_eq!(health.risk_delta, dec!(-10));
        // -5.4 - 10
        assert_eq!(health.new_health_score, dec!(59.6));
    }

    #[test]
    fn test_supplier_delay_penalises_health() {
        let params = ScenarioParameters::neutral().with_supplier_delay(dec!(1.5));
        let health = compose_health(&baseline(dec!(60)), &params, dec!(40), &EngineConfig::default());

        assert_eq!(health.supplier_delta, dec!(-5));
        assert_eq!(health.risk_delta, Decimal::ZERO);
        assert_eq!(health.new_health_score, dec!(55));
    }

    #[test]
    fn test_delta_measured_after_clamping() {
        let params = ScenarioParameters::neutral().with_sales_growth(dec!(1.3));
        let health = compose_health(&baseline(dec!(98)), &params, dec!(6), &EngineConfig::default());

        assert!(health.health_delta > dec!(2));
        assert_eq!(health.new_health_score, dec!(100));
        assert_eq!(health.delta_from_base, dec!(2));
    }

    #[test]
    fn test_floor_clamp() {
        let params = ScenarioParameters::neutral()
            .with_sales_growth(dec!(0.5))
            .with_expense_growth(dec!(2));
        let health = compose_health(&baseline(dec!(10)), &params, dec!(100), &EngineConfig::default());

        assert_eq!(health.new_health_score, Decimal::ZERO);
        assert_eq!(health.delta_from_base, dec!(-10));
    }
}
