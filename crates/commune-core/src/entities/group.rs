//! Group entity - a named topical collection of posts

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Group entity
///
/// `name` is the natural key: lookups and updates address a group by name,
/// and the store enforces its uniqueness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: Snowflake,
    pub name: String,
    pub description: String,
    pub rules: Vec<String>,
    pub private: bool,
    pub author_id: Snowflake,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Group {
    /// Create a new Group
    pub fn new(
        id: Snowflake,
        name: String,
        description: String,
        rules: Vec<String>,
        private: bool,
        author_id: Snowflake,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description,
            rules,
            private,
            author_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if a user is the group's creator
    #[inline]
    pub fn is_author(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }

    /// Replace the mutable content fields
    ///
    /// Name, privacy, and authorship are immutable after creation; only the
    /// description and rules can change.
    pub fn set_content(&mut self, description: String, rules: Vec<String>) {
        self.description = description;
        self.rules = rules;
        self.updated_at = Utc::now();
    }
}
