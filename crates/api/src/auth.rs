//! API key authentication.
//!
//! Keys are accepted from either the `X-API-Key` header or an
//! `Authorization: Bearer <key>` header. When no keys are configured the
//! middleware lets every request through.

use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Authentication configuration.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// Valid API keys.
    pub api_keys: HashSet<String>,
    /// Whether authentication is required.
    pub require_auth: bool,
}

impl AuthConfig {
    /// Creates a configuration requiring one of the given keys.
    pub fn with_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let api_keys: HashSet<String> = keys.into_iter().map(Into::into).collect();
        Self {
            require_auth: !api_keys.is_empty(),
            api_keys,
        }
    }

    /// Parses a comma separated key list, as found in `SCENARIO_API_KEYS`.
    #[must_use]
    pub fn from_key_list(list: &str) -> Self {
        Self::with_keys(
            list.split(',')
                .map(str::trim)
                .filter(|key| !key.is_empty()),
        )
    }
}

/// Authentication state shared across requests.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    config: Arc<AuthConfig>,
}

impl AuthState {
    /// Creates a new authentication state.
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Validates an API key.
    #[must_use]
    pub fn validate_api_key(&self, key: &str) -> bool {
        self.config.api_keys.contains(key)
    }

    /// Checks if authentication is required.
    #[must_use]
    pub fn require_auth(&self) -> bool {
        self.config.require_auth
    }
}

/// Authentication errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthError {
    /// Missing authentication header.
    #[error("Missing authentication")]
    MissingAuth,
    /// Invalid API key.
    #[error("Invalid API key")]
    InvalidApiKey,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = StatusCode::UNAUTHORIZED;

        let body = serde_json::json!({
            "error": self.to_string(),
            "code": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Extracts an API key from request headers.
pub fn extract_api_key(headers: &HeaderMap) -> Option<String> {
    if let Some(api_key) = headers.get("X-API-Key")
        && let Ok(key) = api_key.to_str()
    {
        return Some(key.to_string());
    }

    if let Some(auth_header) = headers.get("Authorization")
        && let Ok(auth_str) = auth_header.to_str()
        && let Some(token) = auth_str.strip_prefix("Bearer ")
    {
        return Some(token.to_string());
    }

    None
}

/// Authentication middleware.
pub async fn auth_middleware(
    State(auth): State<AuthState>,
    headers: HeaderMap,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    if !auth.require_auth() {
        return Ok(next.run(request).await);
    }

    match extract_api_key(&headers) {
        Some(key) if auth.validate_api_key(&key) => {
            debug!("API key accepted");
            Ok(next.run(request).await)
        }
        Some(_) => {
            warn!("Invalid API key");
            Err(AuthError::InvalidApiKey)
        }
        None => {
            warn!("Missing API key");
            Err(AuthError::MissingAuth)
        }
    }
}
