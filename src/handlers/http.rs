//! Shared HTTP state and the health endpoint.

use axum::{http::StatusCode, Json};
use serde_json::json;
use std::sync::Arc;

use crate::auth::{Authenticator, CredentialAuthenticator};
use crate::services::CredentialService;

/// Shared application state for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub credentials: CredentialService,
    pub authenticator: Arc<dyn Authenticator>,
    pub expose_password_hash: bool,
}

impl AppState {
    /// Wire the default authenticator on top of `credentials`.
    pub fn new(credentials: CredentialService, expose_password_hash: bool) -> Self {
        let authenticator = Arc::new(CredentialAuthenticator::new(credentials.clone()));
        Self {
            credentials,
            authenticator,
            expose_password_hash,
        }
    }

    pub fn credentials(&self) -> &CredentialService {
        &self.credentials
    }
    pub fn authenticator(&self) -> &dyn Authenticator {
        self.authenticator.as_ref()
    }
}

/// GET /health — liveness probe.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "keyhold" })),
    )
}
