//! Single-lever sensitivity sweeps.
//!
//! A sweep runs the engine once per point of an evenly spaced grid for one
//! lever while holding the others fixed, the way a slider would be dragged
//! across its range.

use crate::engine::ScenarioEngine;
use rust_decimal::Decimal;
use scenario_domain::{BaselineState, Lever, ScenarioError, ScenarioParameters, SimulationResult};
use serde::Serialize;
use tracing::info;

/// Maximum number of grid points in one sweep.
pub const MAX_SWEEP_STEPS: usize = 1_000;

/// One evaluated point of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepPoint {
    /// Lever value at this point.
    pub value: Decimal,
    /// Simulation result at this point.
    pub result: SimulationResult,
}

/// Definition of a sweep over one lever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeverSweep {
    /// Lever being varied.
    pub lever: Lever,
    /// First value of the grid.
    pub start: Decimal,
    /// Last value of the grid.
    pub end: Decimal,
    /// Number of grid points, including both ends.
    pub steps: usize,
}

impl LeverSweep {
    /// Creates a new sweep definition.
    #[must_use]
    pub fn new(lever: Lever, start: Decimal, end: Decimal, steps: usize) -> Self {
        Self {
            lever,
            start,
            end,
            steps,
        }
    }

    /// Sweep over the lever's typical range.
    #[must_use]
    pub fn typical(lever: Lever, steps: usize) -> Self {
        let range = lever.typical_range();
        Self::new(lever, range.min, range.max, steps)
    }

    /// Values of the grid.
    ///
    /// # Errors
    /// Returns [`ScenarioError::InvalidSweep`] if the step count is zero or
    /// above [`MAX_SWEEP_STEPS`], if a single step spans two different
    /// values, or if the range itself overflows.
    pub fn values(&self) -> Result<Vec<Decimal>, ScenarioError> {
        match self.steps {
            0 => Err(ScenarioError::InvalidSweep(
                "at least one step is required".to_string(),
            )),
            n if n > MAX_SWEEP_STEPS => Err(ScenarioError::InvalidSweep(format!(
                "{n} steps exceeds the limit of {MAX_SWEEP_STEPS}"
            ))),
            1 if self.start != self.end => Err(ScenarioError::InvalidSweep(
                "a single step requires start and end to match".to_string(),
            )),
            1 => Ok(vec![self.start]),
            n => {
                let span = self.end.checked_sub(self.start).ok_or_else(|| {
                    ScenarioError::InvalidSweep("range exceeds the decimal limits".to_string())
                })?;
                let increment = span / Decimal::from(n - 1);
                let mut values: Vec<Decimal> = (0..n - 1)
                    .map(|i| {
                        self.start
                            .saturating_add(increment.saturating_mul(Decimal::from(i)))
                    })
                    .collect();
                values.push(self.end);
                Ok(values)
            }
        }
    }

    /// Evaluates the sweep.
    ///
    /// # Errors
    /// Returns [`ScenarioError::InvalidSweep`] if the grid is invalid.
    pub fn run(
        &self,
        engine: &ScenarioEngine,
        baseline: &BaselineState,
        params: &ScenarioParameters,
    ) -> Result<Vec<SweepPoint>, ScenarioError> {
        let values = self.values()?;
        info!(
            lever = %self.lever,
            start = %self.start,
            end = %self.end,
            steps = values.len(),
            "running lever sweep"
        );

        Ok(values
            .into_iter()
            .map(|value| SweepPoint {
                value,
                result: engine.simulate(baseline, &params.with(self.lever, value)),
            })
            .collect())
    }
}
