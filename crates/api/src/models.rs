//! API request/response models.

use rust_decimal::Decimal;
use scenario_domain::{BaselineState, Lever, ScenarioParameters, SimulationResult};
use scenario_simulation::{SimulationReport, SweepPoint};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Request body for a single simulation.
///
/// Lever fields sit at the top level and default to neutral. A baseline may be
/// supplied inline; otherwise the server's provider is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Lever values.
    #[serde(flatten)]
    pub parameters: ScenarioParameters,
    /// Baseline override.
    #[serde(default)]
    pub baseline: Option<BaselineState>,
    /// Whether to include intermediate breakdowns.
    #[serde(default)]
    pub detailed: bool,
}

/// Response body for a single simulation.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SimulationResponse {
    /// Caller-facing result only.
    Summary(SimulationResult),
    /// Result with intermediate breakdowns.
    Detailed(Box<SimulationReport>),
}

/// Request body for a lever sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepRequest {
    /// Name of the lever to vary.
    pub lever: String,
    /// First value of the grid.
    pub start: Decimal,
    /// Last value of the grid.
    pub end: Decimal,
    /// Number of grid points.
    pub steps: usize,
    /// Values of the levers held fixed.
    #[serde(default)]
    pub levers: ScenarioParameters,
    /// Baseline override.
    #[serde(default)]
    pub baseline: Option<BaselineState>,
}

/// Response body for a lever sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SweepResponse {
    /// Lever that was varied.
    pub lever: Lever,
    /// Evaluated grid points.
    pub points: Vec<SweepPoint>,
}
