//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use commune_core::traits::{PostRepository, RepoResult};
use commune_core::{Post, Snowflake};

use crate::models::PostModel;

use super::error::map_db_error;

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_group(&self, group_id: Snowflake) -> RepoResult<Vec<Post>> {
        // Snowflake IDs are monotonic, so id DESC is a stable tiebreak for
        // posts sharing a created_at timestamp
        let results = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, group_id, author_id, title, content, created_at, updated_at
            FROM posts
            WHERE group_id = $1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(group_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_by_group(&self, group_id: Snowflake) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM posts WHERE group_id = $1
            ",
        )
        .bind(group_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}
