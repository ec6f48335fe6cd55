//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use scenario_simulation::prelude::*;
//!
//! let baseline = BaselineState::synthetic();
//! let result = simulate(baseline, ScenarioParameters::neutral());
//! assert_eq!(result.revenue_forecast.len(), 4);
//! ```

// Engine
pub use crate::config::EngineConfig;
pub use crate::engine::{ScenarioEngine, SimulationReport, simulate};

// Stages
pub use crate::cash::{CashProjection, project_cash};
pub use crate::explanation::{BASELINE_SUMMARY, compose_explanation};
pub use crate::health::{HealthBreakdown, compose_health};
pub use crate::revenue::{RevenueProjection, project_revenue};
pub use crate::risk::{RiskBreakdown, compose_risk};

// Sweeps
pub use crate::sweep::{LeverSweep, MAX_SWEEP_STEPS, SweepPoint};

// Domain
pub use scenario_domain::{
    BaselineState, Lever, LeverBounds, RevenuePoint, ScenarioError, ScenarioParameters,
    SimulationResult,
};
