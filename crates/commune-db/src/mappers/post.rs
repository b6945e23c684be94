//! Post entity <-> model mapper

use commune_core::{Post, Snowflake};

use crate::models::PostModel;

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: Snowflake::new(model.id),
            group_id: Snowflake::new(model.group_id),
            author_id: Snowflake::new(model.author_id),
            title: model.title,
            content: model.content,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
