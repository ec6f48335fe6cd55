//! HTTP transport for the scenario engine.
//!
//! This crate exposes the engine over a small REST API:
//! - Health check
//! - Current baseline lookup
//! - Single scenario simulation
//! - Single-lever sweeps
//! - Optional API key authentication

/// Authentication module.
pub mod auth;
/// Error types.
pub mod error;
/// Request handlers.
pub mod handlers;
/// API request/response models.
pub mod models;
/// Route definitions.
pub mod routes;
/// Server configuration and startup.
pub mod server;
/// Application state.
pub mod state;

pub use auth::{AuthConfig, AuthError, AuthState};
pub use error::ApiError;
pub use routes::create_router;
pub use server::{ApiServer, ServerConfig};
pub use state::AppState;
