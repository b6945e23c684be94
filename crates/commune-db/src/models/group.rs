//! Group database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the groups table
#[derive(Debug, Clone, FromRow)]
pub struct GroupModel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub rules: Vec<String>,
    pub private: bool,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row shape of the popularity listing: identity plus aggregated post count
#[derive(Debug, Clone, FromRow)]
pub struct PopularGroupModel {
    pub id: i64,
    pub name: String,
    pub post_count: i64,
}
