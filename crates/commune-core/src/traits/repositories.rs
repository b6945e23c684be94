//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Group, Post, User};
use crate::error::DomainError;
use crate::value_objects::{Snowflake, Theme};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Group Repository
// ============================================================================

/// Projection returned by the popularity listing: group identity plus its
/// post count, never the full record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopularGroup {
    pub id: Snowflake,
    pub name: String,
    pub post_count: i64,
}

#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Find a group by its unique name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Group>>;

    /// List up to `limit` groups ordered by descending post count,
    /// ties broken by name ascending
    async fn find_popular(&self, limit: i64) -> RepoResult<Vec<PopularGroup>>;

    /// Insert a new group
    ///
    /// Fails with `GroupNameTaken` when the name is already in use; the
    /// uniqueness check belongs to the store, not the caller.
    async fn create(&self, group: &Group) -> RepoResult<()>;

    /// Update the description and rules of the group matching `name`
    ///
    /// Fails with `GroupNotFound` when no row matches.
    async fn update_content(
        &self,
        name: &str,
        description: &str,
        rules: &[String],
    ) -> RepoResult<()>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// List all posts in a group, newest first
    async fn find_by_group(&self, group_id: Snowflake) -> RepoResult<Vec<Post>>;

    /// Count posts in a group
    async fn count_by_group(&self, group_id: Snowflake) -> RepoResult<i64>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find users by ID in bulk (authors of a post list)
    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<User>>;

    /// Set the theme preference for a user
    ///
    /// Fails with `UserNotFound` when no row matches.
    async fn set_theme(&self, id: Snowflake, theme: Theme) -> RepoResult<()>;
}
