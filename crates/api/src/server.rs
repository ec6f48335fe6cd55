//! Server configuration and startup.

use crate::auth::{AuthConfig, AuthState};
use crate::routes::create_router;
use crate::state::AppState;
use axum::Router;
use axum::http::HeaderValue;
use std::env;
use std::net::SocketAddr;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Allowed CORS origins; `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// Comma separated API keys; empty disables authentication.
    pub api_keys: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            cors_origins: vec!["*".to_string()],
            api_keys: String::new(),
        }
    }
}

impl ServerConfig {
    /// Reads `SCENARIO_HOST`, `SCENARIO_PORT`, `CORS_ORIGINS` and
    /// `SCENARIO_API_KEYS`, keeping defaults for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = env::var("SCENARIO_HOST") {
            config.host = host;
        }
        if let Ok(port) = env::var("SCENARIO_PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => warn!(%port, "Ignoring invalid SCENARIO_PORT"),
            }
        }
        if let Ok(origins) = env::var("CORS_ORIGINS") {
            config.cors_origins = parse_origins(&origins);
        }
        if let Ok(keys) = env::var("SCENARIO_API_KEYS") {
            config.api_keys = keys;
        }

        config
    }

    /// Sets the host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Socket address string.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the CORS layer.
    #[must_use]
    pub fn cors_layer(&self) -> CorsLayer {
        if self.cors_origins.iter().any(|origin| origin == "*") {
            return CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
        }

        let origins: Vec<HeaderValue> = self
            .cors_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(%origin, "Skipping invalid CORS origin");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

fn parse_origins(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

/// HTTP server wrapping the scenario engine.
pub struct ApiServer {
    config: ServerConfig,
    state: AppState,
}

impl ApiServer {
    /// Creates a new server.
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Builds the full application router.
    pub fn router(&self) -> Router {
        let auth = AuthState::new(AuthConfig::from_key_list(&self.config.api_keys));
        if auth.require_auth() {
            info!("API key authentication enabled");
        }

        create_router(self.state.clone(), auth).layer(self.config.cors_layer())
    }

    /// Binds the listener and serves until the process is stopped.
    ///
    /// # Errors
    /// Returns an error if the address is invalid or cannot be bound.
    pub async fn run(self) -> std::io::Result<()> {
        let addr: SocketAddr = self
            .config
            .address()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let router = self.router();
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!(%addr, "Scenario API listening");

        axum::serve(listener, router).await
    }
}
