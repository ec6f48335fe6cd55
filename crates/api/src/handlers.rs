//! Request handlers.

use crate::error::ApiError;
use crate::models::{
    HealthResponse, SimulationRequest, SimulationResponse, SweepRequest, SweepResponse,
};
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use scenario_domain::{BaselineState, Lever};
use scenario_simulation::LeverSweep;
use tracing::info;

/// Liveness check.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Returns the baseline the provider currently supplies.
pub async fn get_baseline(State(state): State<AppState>) -> Result<Json<BaselineState>, ApiError> {
    Ok(Json(state.provider.baseline().await?))
}

/// Runs one scenario.
pub async fn simulate(
    State(state): State<AppState>,
    payload: Result<Json<SimulationRequest>, JsonRejection>,
) -> Result<Json<SimulationResponse>, ApiError> {
    let Json(request) = payload?;
    state.bounds.validate(&request.parameters)?;
    let baseline = resolve_baseline(&state, request.baseline).await?;

    info!(
        active_levers = request.parameters.active_levers().len(),
        detailed = request.detailed,
        "simulation requested"
    );

    let response = if request.detailed {
        SimulationResponse::Detailed(Box::new(
            state
                .engine
                .simulate_detailed(&baseline, &request.parameters),
        ))
    } else {
        SimulationResponse::Summary(state.engine.simulate(&baseline, &request.parameters))
    };

    Ok(Json(response))
}

/// Sweeps one lever across a grid.
pub async fn sweep(
    State(state): State<AppState>,
    payload: Result<Json<SweepRequest>, JsonRejection>,
) -> Result<Json<SweepResponse>, ApiError> {
    let Json(request) = payload?;
    let lever = Lever::parse(&request.lever)?;

    // Every grid point lies between the endpoints, so checking both is enough.
    state.bounds.validate(&request.levers.with(lever, request.start))?;
    state.bounds.validate(&request.levers.with(lever, request.end))?;

    let baseline = resolve_baseline(&state, request.baseline).await?;
    let points = LeverSweep::new(lever, request.start, request.end, request.steps).run(
        &state.engine,
        &baseline,
        &request.levers,
    )?;

    Ok(Json(SweepResponse { lever, points }))
}

async fn resolve_baseline(
    state: &AppState,
    inline: Option<BaselineState>,
) -> Result<BaselineState, ApiError> {
    match inline {
        Some(baseline) => Ok(baseline),
        None => Ok(state.provider.baseline().await?),
    }
}
