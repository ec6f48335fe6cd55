//! Application state shared across handlers.

use scenario_domain::{BaselineProvider, LeverBounds, StaticBaselineProvider};
use scenario_simulation::ScenarioEngine;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Scenario engine.
    pub engine: ScenarioEngine,
    /// Source of the baseline used when a request does not carry one.
    pub provider: Arc<dyn BaselineProvider>,
    /// Bounds applied to incoming lever values.
    pub bounds: LeverBounds,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(engine: ScenarioEngine, provider: Arc<dyn BaselineProvider>) -> Self {
        Self {
            engine,
            provider,
            bounds: LeverBounds::default(),
        }
    }

    /// Sets the lever bounds.
    #[must_use]
    pub fn with_bounds(mut self, bounds: LeverBounds) -> Self {
        self.bounds = bounds;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            ScenarioEngine::default(),
            Arc::new(StaticBaselineProvider::default()),
        )
    }
}
