//! Route definitions.

use crate::auth::{AuthState, auth_middleware};
use crate::handlers;
use crate::state::AppState;
use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

/// Builds the `/api/v1` router.
///
/// The health check is always open; every other route sits behind the API key
/// middleware.
pub fn create_router(state: AppState, auth: AuthState) -> Router {
    let protected = Router::new()
        .route("/baseline", get(handlers::get_baseline))
        .route("/simulate", post(handlers::simulate))
        .route("/simulate/sweep", post(handlers::sweep))
        .route_layer(middleware::from_fn_with_state(auth, auth_middleware));

    let api = Router::new()
        .route("/health", get(handlers::health_check))
        .merge(protected)
        .with_state(state);

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
}
