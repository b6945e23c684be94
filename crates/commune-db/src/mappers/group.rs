//! Group entity <-> model mapper

use commune_core::traits::PopularGroup;
use commune_core::{Group, Snowflake};

use crate::models::{GroupModel, PopularGroupModel};

impl From<GroupModel> for Group {
    fn from(model: GroupModel) -> Self {
        Group {
            id: Snowflake::new(model.id),
            name: model.name,
            description: model.description,
            rules: model.rules,
            private: model.private,
            author_id: Snowflake::new(model.author_id),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<PopularGroupModel> for PopularGroup {
    fn from(model: PopularGroupModel) -> Self {
        PopularGroup {
            id: Snowflake::new(model.id),
            name: model.name,
            post_count: model.post_count,
        }
    }
}
