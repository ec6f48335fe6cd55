//! Domain model for the scenario simulation engine.
//!
//! This crate holds the types shared by the engine, the HTTP layer and the CLI:
//! - Baseline financial state and the raw signals it is derived from
//! - The five scenario levers and their bounds
//! - Simulation results and rounding rules
//! - Baseline provider abstraction
//! - Error types

/// Baseline financial state.
pub mod baseline;
/// Error types.
pub mod error;
/// Numeric conversion and rounding helpers.
pub mod numeric;
/// Scenario levers and parameters.
pub mod parameters;
/// Baseline provider abstraction.
pub mod provider;
/// Simulation result types.
pub mod result;

pub use baseline::{BaselineSignals, BaselineState};
pub use error::ScenarioError;
pub use parameters::{Lever, LeverBounds, LeverRange, ScenarioParameters};
pub use provider::{BaselineProvider, StaticBaselineProvider};
pub use result::{RevenuePoint, SimulationResult};
