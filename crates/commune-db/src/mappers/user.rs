//! User entity <-> model mapper

use commune_core::{Snowflake, Theme, User};

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            avatar: model.avatar,
            // Unknown stored values fall back to the default theme
            theme: model.theme.parse::<Theme>().unwrap_or_default(),
            created_at: model.created_at,
        }
    }
}
