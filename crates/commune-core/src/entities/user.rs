//! User entity
//!
//! Users are created by the external auth provider; this system reads them
//! for authorship and owns exactly one mutable field, the theme preference.

use chrono::{DateTime, Utc};

use crate::value_objects::{Snowflake, Theme};

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub avatar: Option<String>,
    pub theme: Theme,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with the default theme
    pub fn new(id: Snowflake, username: String) -> Self {
        Self {
            id,
            username,
            avatar: None,
            theme: Theme::default(),
            created_at: Utc::now(),
        }
    }

    /// Update the theme preference
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Get the avatar URL if set
    pub fn avatar_url(&self) -> Option<String> {
        self.avatar
            .as_ref()
            .map(|hash| format!("/avatars/{}/{}.png", self.id, hash))
    }
}
