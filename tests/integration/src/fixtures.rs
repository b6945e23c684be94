//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
///
/// Group names and usernames persist across test runs (no cleanup), so the
/// suffix is based on wall-clock time once per process.
pub fn unique_suffix() -> u64 {
    static BASE: OnceLock<u64> = OnceLock::new();
    let base = *BASE.get_or_init(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
            * 10_000
    });
    base + COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Get a unique username
pub fn unique_username() -> String {
    format!("testuser{}", unique_suffix())
}

/// Create group request
#[derive(Debug, Serialize)]
pub struct CreateGroupRequest {
    pub name: String,
    pub description: String,
    pub rules: Vec<String>,
    pub private: bool,
}

impl CreateGroupRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("test-group-{suffix}"),
            description: "A test group".to_string(),
            rules: vec!["Be kind".to_string()],
            private: false,
        }
    }
}

/// Update group request
#[derive(Debug, Serialize)]
pub struct UpdateGroupRequest {
    pub description: String,
    pub rules: Vec<String>,
}

/// Update preferences request
#[derive(Debug, Serialize)]
pub struct UpdatePreferencesRequest {
    pub theme: String,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub avatar: Option<String>,
    pub created_at: String,
}

/// Preferences response
#[derive(Debug, Deserialize)]
pub struct PreferencesResponse {
    pub theme: String,
}

/// Popular groups listing entry
#[derive(Debug, Deserialize)]
pub struct PopularGroupResponse {
    pub id: String,
    pub name: String,
}

/// Group response (create)
#[derive(Debug, Deserialize)]
pub struct GroupResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rules: Vec<String>,
    pub private: bool,
    pub author_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Full group response with author and posts (get by name)
#[derive(Debug, Deserialize)]
pub struct GroupDetailResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rules: Vec<String>,
    pub private: bool,
    pub author: UserResponse,
    pub posts: Vec<PostResponse>,
    pub created_at: String,
    pub updated_at: String,
}

/// Post response
#[derive(Debug, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub group_id: String,
    pub title: String,
    pub content: String,
    pub author: UserResponse,
    pub created_at: String,
    pub updated_at: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
