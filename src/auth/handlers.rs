//! Auth HTTP handlers: register, login, user lookup.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::auth::AuthError;
use crate::error::AppError;
use crate::handlers::http::AppState;
use crate::models::{UserResponse, DEFAULT_ROLE};

pub const LOGIN_SUCCESSFUL: &str = "Login successful";
pub const LOGIN_FAILED: &str = "Login failed";
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub username: String,
}

/// POST /api/register
///
/// Always stores a new `USER` account; duplicate usernames are not rejected.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .credentials()
        .register_user(&body.username, &body.password, DEFAULT_ROLE)
        .await?;
    Ok(Json(UserResponse::from_user(user, state.expose_password_hash)))
}

/// POST /api/login
///
/// Every failure is a 401 with a plain-text body. Failures other than bad
/// credentials embed the underlying error text.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> (StatusCode, String) {
    match state
        .authenticator()
        .authenticate(&body.username, &body.password)
        .await
    {
        Ok(auth) if auth.authenticated => {
            info!(user_id = auth.principal.id, "login succeeded");
            (StatusCode::OK, LOGIN_SUCCESSFUL.to_string())
        }
        Ok(auth) => {
            warn!(user_id = auth.principal.id, "login not authenticated");
            (StatusCode::UNAUTHORIZED, LOGIN_FAILED.to_string())
        }
        Err(AuthError::BadCredentials) => {
            info!(username = %body.username, "login rejected: bad credentials");
            (StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS.to_string())
        }
        Err(AuthError::Other(details)) => {
            warn!(username = %body.username, error = %details, "login failed");
            (StatusCode::UNAUTHORIZED, format!("{}: {}", LOGIN_FAILED, details))
        }
    }
}

/// GET /api/users?username=<name>
pub async fn find_user(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .credentials()
        .find_by_username(&query.username)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(UserResponse::from_user(user, state.expose_password_hash)))
}
