//! Scenario simulation engine.
//!
//! This crate turns a baseline financial state and five lever multipliers into
//! a forecast:
//! - Revenue projection over a short horizon
//! - Cash projection net of scaled expenses
//! - Unified risk index
//! - Composite health score
//! - Plain language explanation of the active levers
//!
//! Every stage is a pure function; the engine keeps no state between calls.

/// Prelude module for convenient imports.
pub mod prelude;

/// Cash projection.
pub mod cash;
/// Engine coefficients.
pub mod config;
/// Scenario engine.
pub mod engine;
/// Explanation composer.
pub mod explanation;
/// Health composer.
pub mod health;
/// Revenue projection.
pub mod revenue;
/// Risk composer.
pub mod risk;
/// Single-lever sweeps.
pub mod sweep;

pub use config::EngineConfig;
pub use engine::{ScenarioEngine, SimulationReport, simulate};
pub use sweep::{LeverSweep, SweepPoint};
