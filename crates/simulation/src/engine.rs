//! Scenario engine.
//!
//! Chains the stages in a single pass: revenue, cash and risk first, then
//! health from the risk index, then the explanation. The engine holds only its
//! configuration, so it is `Copy` and can be shared freely across threads.

use crate::cash::{CashProjection, project_cash};
use crate::config::EngineConfig;
use crate::explanation::compose_explanation;
use crate::health::{HealthBreakdown, compose_health};
use crate::revenue::{RevenueProjection, project_revenue};
use crate::risk::{RiskBreakdown, compose_risk};
use scenario_domain::numeric::{round_one_decimal, round_whole};
use scenario_domain::{BaselineState, RevenuePoint, ScenarioParameters, SimulationResult};
use serde::Serialize;
use tracing::debug;

/// Result of a simulation together with the intermediate figures behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    /// Rounded, caller-facing result.
    pub result: SimulationResult,
    /// Unrounded revenue series.
    pub revenue: RevenueProjection,
    /// Unrounded cash figures.
    pub cash: CashProjection,
    /// Risk components.
    pub risk: RiskBreakdown,
    /// Health components.
    pub health: HealthBreakdown,
}

/// Deterministic what-if calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScenarioEngine {
    config: EngineConfig,
}

impl ScenarioEngine {
    /// Creates an engine with a specific calibration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs a scenario against a baseline.
    #[must_use]
    pub fn simulate(
        &self,
        baseline: &BaselineState,
        params: &ScenarioParameters,
    ) -> SimulationResult {
        self.simulate_detailed(baseline, params).result
    }

    /// Runs a scenario and keeps every intermediate breakdown.
    #[must_use]
    pub fn simulate_detailed(
        &self,
        baseline: &BaselineState,
        params: &ScenarioParameters,
    ) -> SimulationReport {
        let config = &self.config;
        debug!(?params, "running scenario");

        let revenue = project_revenue(
            baseline.base_expense_total,
            params.sales_growth_multiplier,
            config,
        );
        let cash = project_cash(
            baseline.starting_cash,
            baseline.base_expense_total,
            params.expense_growth_multiplier,
            &revenue,
            config,
        );
        let risk = compose_risk(baseline, params, config);
        let health = compose_health(baseline, params, risk.risk_index, config);
        let explanation_summary = compose_explanation(params);

        let revenue_forecast = revenue
            .values
            .iter()
            .enumerate()
            .map(|(i, value)| RevenuePoint::new(RevenuePoint::label(i), round_whole(*value)))
            .collect();

        let result = SimulationResult {
            new_health_score: round_one_decimal(health.new_health_score),
            delta_from_base: round_one_decimal(health.delta_from_base),
            projected_cash: round_whole(cash.projected_cash),
            risk_index: round_one_decimal(risk.risk_index),
            revenue_forecast,
            explanation_summary,
            metadata: *baseline,
        };

        debug!(
            health = %result.new_health_score,
            risk = %result.risk_index,
            cash = %result.projected_cash,
            "scenario complete"
        );

        SimulationReport {
            result,
            revenue,
            cash,
            risk,
            health,
        }
    }
}

/// Runs a scenario with the default calibration.
#[must_use]
pub fn simulate(baseline: BaselineState, params: ScenarioParameters) -> SimulationResult {
    ScenarioEngine::default().simulate(&baseline, &params)
}
