//! Group service
//!
//! Handles group creation, content updates, and the public queries.

use std::collections::HashMap;

use commune_core::{Group, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    CreateGroupRequest, GroupDetailResponse, GroupResponse, PopularGroupResponse, PostResponse,
    UpdateGroupRequest, UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Group service
pub struct GroupService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GroupService<'a> {
    /// Create a new GroupService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the most popular groups by post count
    #[instrument(skip(self))]
    pub async fn popular_groups(&self, limit: i64) -> ServiceResult<Vec<PopularGroupResponse>> {
        let entries = self.ctx.group_repo().find_popular(limit).await?;
        Ok(entries.into_iter().map(PopularGroupResponse::from).collect())
    }

    /// Get a group by name with its author and full post list
    ///
    /// An unknown name is an absent result, not an error.
    #[instrument(skip(self))]
    pub async fn get_group(&self, name: &str) -> ServiceResult<Option<GroupDetailResponse>> {
        let Some(group) = self.ctx.group_repo().find_by_name(name).await? else {
            return Ok(None);
        };

        let posts = self.ctx.post_repo().find_by_group(group.id).await?;

        // Resolve the group author and every post author in one query
        let mut author_ids: Vec<Snowflake> = vec![group.author_id];
        author_ids.extend(posts.iter().map(|p| p.author_id));
        author_ids.sort_unstable();
        author_ids.dedup();

        let authors: HashMap<Snowflake, UserResponse> = self
            .ctx
            .user_repo()
            .find_by_ids(&author_ids)
            .await?
            .iter()
            .map(|u| (u.id, UserResponse::from(u)))
            .collect();

        let resolve = |id: Snowflake| {
            authors
                .get(&id)
                .cloned()
                .ok_or_else(|| ServiceError::internal(format!("missing author row for {id}")))
        };

        let post_responses = posts
            .iter()
            .map(|p| Ok(PostResponse::with_author(p, resolve(p.author_id)?)))
            .collect::<ServiceResult<Vec<_>>>()?;

        Ok(Some(GroupDetailResponse {
            id: group.id.to_string(),
            name: group.name,
            description: group.description,
            rules: group.rules,
            private: group.private,
            author: resolve(group.author_id)?,
            posts: post_responses,
            created_at: group.created_at,
            updated_at: group.updated_at,
        }))
    }

    /// Create a new group owned by the authenticated user
    ///
    /// Name uniqueness belongs to the store; a duplicate surfaces as
    /// `GroupNameTaken`.
    #[instrument(skip(self, request))]
    pub async fn create_group(
        &self,
        author_id: Snowflake,
        request: CreateGroupRequest,
    ) -> ServiceResult<GroupResponse> {
        let group = Group::new(
            self.ctx.generate_id(),
            request.name,
            request.description,
            request.rules,
            request.private,
            author_id,
        );

        self.ctx.group_repo().create(&group).await?;

        info!(group_id = %group.id, name = %group.name, author_id = %author_id, "Group created");

        Ok(GroupResponse::from(&group))
    }

    /// Update the description and rules of an existing group
    #[instrument(skip(self, request))]
    pub async fn update_group(
        &self,
        name: &str,
        request: UpdateGroupRequest,
    ) -> ServiceResult<()> {
        self.ctx
            .group_repo()
            .update_content(name, &request.description, &request.rules)
            .await?;

        info!(name = %name, "Group content updated");

        Ok(())
    }
}
