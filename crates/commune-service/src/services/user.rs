//! User service
//!
//! Reads users for authorship and owns the theme preference.

use commune_core::{DomainError, Snowflake, Theme};
use tracing::{info, instrument};

use crate::dto::PreferencesResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the caller's preferences
    #[instrument(skip(self))]
    pub async fn get_preferences(&self, user_id: Snowflake) -> ServiceResult<PreferencesResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        Ok(PreferencesResponse { theme: user.theme })
    }

    /// Set the caller's theme preference
    #[instrument(skip(self))]
    pub async fn set_theme(
        &self,
        user_id: Snowflake,
        theme: Theme,
    ) -> ServiceResult<PreferencesResponse> {
        self.ctx.user_repo().set_theme(user_id, theme).await?;

        info!(user_id = %user_id, theme = %theme, "Theme preference updated");

        Ok(PreferencesResponse { theme })
    }
}
