//! Post entity - a content item belonging to exactly one group and one author

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Snowflake,
    pub group_id: Snowflake,
    pub author_id: Snowflake,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post
    pub fn new(
        id: Snowflake,
        group_id: Snowflake,
        author_id: Snowflake,
        title: String,
        content: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            group_id,
            author_id,
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }
}
