//! Minimal user registration and login service built with Rust.
//!
//! Passwords are stored as salted Argon2 hashes behind a pluggable
//! credential store (PostgreSQL or in-memory); login answers with a plain
//! authenticated / not-authenticated result.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use handlers::http::AppState;
pub use services::CredentialService;

use axum::routing::{get, post};
use handlers::http;
use tower_http::trace::TraceLayer;

/// Build the API router (register, login, user lookup, health). Used by main and by integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    let api_routes = axum::Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/users", get(auth::find_user));

    axum::Router::new()
        .route("/health", get(http::health))
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
