//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

use commune_core::Theme;

// ============================================================================
// User Responses
// ============================================================================

/// Public user response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Theme preference response
#[derive(Debug, Clone, Serialize)]
pub struct PreferencesResponse {
    pub theme: Theme,
}

// ============================================================================
// Group Responses
// ============================================================================

/// Entry of the popular groups listing
#[derive(Debug, Clone, Serialize)]
pub struct PopularGroupResponse {
    pub id: String,
    pub name: String,
}

/// Basic group response (create)
#[derive(Debug, Clone, Serialize)]
pub struct GroupResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rules: Vec<String>,
    pub private: bool,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full group response with author and posts (get by name)
#[derive(Debug, Clone, Serialize)]
pub struct GroupDetailResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rules: Vec<String>,
    pub private: bool,
    pub author: UserResponse,
    pub posts: Vec<PostResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Post Responses
// ============================================================================

/// Post response carrying its author and parent group id
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub group_id: String,
    pub title: String,
    pub content: String,
    pub author: UserResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: &'static str,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ready" } else { "not_ready" },
            database: if db_healthy { "up" } else { "down" },
        }
    }
}
