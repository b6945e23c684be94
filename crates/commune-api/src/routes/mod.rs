//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{groups, health, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(group_routes()).merge(user_routes())
}

/// Group routes
///
/// `/groups/popular` is registered before the `/groups/:name` wildcard so
/// the literal segment wins.
fn group_routes() -> Router<AppState> {
    Router::new()
        .route("/groups/popular", get(groups::popular_groups))
        .route("/groups", post(groups::create_group))
        .route("/groups/:name", get(groups::get_group))
        .route("/groups/:name", patch(groups::update_group))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me/preferences", get(users::get_preferences))
        .route("/users/@me/preferences", patch(users::update_preferences))
}
