//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use commune_core::traits::PopularGroup;
use commune_core::{Group, Post, User};

use super::responses::{GroupResponse, PopularGroupResponse, PostResponse, UserResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            avatar: user.avatar.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Group Mappers
// ============================================================================

impl From<&Group> for GroupResponse {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id.to_string(),
            name: group.name.clone(),
            description: group.description.clone(),
            rules: group.rules.clone(),
            private: group.private,
            author_id: group.author_id.to_string(),
            created_at: group.created_at,
            updated_at: group.updated_at,
        }
    }
}

impl From<Group> for GroupResponse {
    fn from(group: Group) -> Self {
        Self::from(&group)
    }
}

impl From<PopularGroup> for PopularGroupResponse {
    fn from(entry: PopularGroup) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name,
        }
    }
}

// ============================================================================
// Post Mappers
// ============================================================================

impl PostResponse {
    /// Build a post response with its resolved author
    pub fn with_author(post: &Post, author: UserResponse) -> Self {
        Self {
            id: post.id.to_string(),
            group_id: post.group_id.to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            author,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
