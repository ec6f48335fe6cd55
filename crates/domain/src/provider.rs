//! Baseline provider abstraction.
//!
//! The engine never reaches out for its baseline; whoever drives it (the HTTP
//! layer, the CLI) obtains one from a provider and passes it in explicitly.

use crate::baseline::BaselineState;
use crate::error::ScenarioError;
use async_trait::async_trait;

/// Source of baseline financial state.
#[async_trait]
pub trait BaselineProvider: Send + Sync {
    /// Returns the current baseline.
    ///
    /// # Errors
    /// Returns [`ScenarioError::Baseline`] if the baseline cannot be produced.
    async fn baseline(&self) -> Result<BaselineState, ScenarioError>;
}

/// Provider that always returns the same baseline.
#[derive(Debug, Clone, Copy)]
pub struct StaticBaselineProvider {
    baseline: BaselineState,
}

impl StaticBaselineProvider {
    /// Creates a provider for a fixed baseline.
    #[must_use]
    pub fn new(baseline: BaselineState) -> Self {
        Self { baseline }
    }
}

impl Default for StaticBaselineProvider {
    fn default() -> Self {
        Self::new(BaselineState::synthetic())
    }
}

#[async_trait]
impl BaselineProvider for StaticBaselineProvider {
    async fn baseline(&self) -> Result<BaselineState, ScenarioError> {
        Ok(self.baseline)
    }
}
