//! Unified risk index.
//!
//! Three independent signals are summed and the total is clamped, not scaled,
//! into the score bounds. Components keep their sign: a lever below neutral
//! lowers risk. Components saturate at the decimal range before clamping.

use crate::config::EngineConfig;
use rust_decimal::Decimal;
use scenario_domain::{BaselineState, ScenarioParameters};
use serde::Serialize;
use tracing::debug;

/// Components of the unified risk index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskBreakdown {
    /// Contribution of baseline fraud findings.
    pub fraud_component: Decimal,
    /// Contribution of supplier delays and reorder policy.
    pub inventory_component: Decimal,
    /// Contribution of expense growth.
    pub expense_component: Decimal,
    /// Sum of the components before clamping.
    pub raw_risk: Decimal,
    /// Clamped risk index, unrounded.
    pub risk_index: Decimal,
}

impl RiskBreakdown {
    /// Whether clamping changed the raw risk.
    #[must_use]
    pub fn is_clamped(&self) -> bool {
        self.raw_risk != self.risk_index
    }
}

/// Combines fraud, inventory and expense signals into the risk index.
#[must_use]
pub fn compose_risk(
    baseline: &BaselineState,
    params: &ScenarioParameters,
    config: &EngineConfig,
) -> RiskBreakdown {
    let fraud_component = baseline
        .fraud_rate_percent
        .saturating_mul(config.fraud_weight)
        .saturating_mul(params.fraud_sensitivity);

    let supplier = excess(params.supplier_delay_factor)
        .saturating_mul(config.supplier_delay_risk_weight);
    let reorder = excess(params.reorder_threshold_multiplier)
        .saturating_mul(config.reorder_risk_weight);
    let inventory_component = supplier.saturating_add(reorder);

    let expense_component =
        excess(params.expense_growth_multiplier).saturating_mul(config.expense_risk_weight);

    let raw_risk = fraud_component
        .saturating_add(inventory_component)
        .saturating_add(expense_component);
    let risk_index = config.clamp_score(raw_risk);

    debug!(
        %fraud_component,
        %inventory_component,
        %expense_component,
        %raw_risk,
        %risk_index,
        "composed risk"
    );

    RiskBreakdown {
        fraud_component,
        inventory_component,
        expense_component,
        raw_risk,
        risk_index,
    }
}

/// Distance of a lever from neutral.
pub(crate) fn excess(lever: Decimal) -> Decimal {
    lever.saturating_sub(Decimal::ONE)
}
