//! PostgreSQL implementation of GroupRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use commune_core::traits::{GroupRepository, PopularGroup, RepoResult};
use commune_core::{DomainError, Group};

use crate::models::{GroupModel, PopularGroupModel};

use super::error::{group_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of GroupRepository
///
/// `groups` is a reserved word in PostgreSQL, so the table name is quoted
/// in every statement.
#[derive(Clone)]
pub struct PgGroupRepository {
    pool: PgPool,
}

impl PgGroupRepository {
    /// Create a new PgGroupRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupRepository for PgGroupRepository {
    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Group>> {
        let result = sqlx::query_as::<_, GroupModel>(
            r#"
            SELECT id, name, description, rules, private, author_id, created_at, updated_at
            FROM "groups"
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Group::from))
    }

    #[instrument(skip(self))]
    async fn find_popular(&self, limit: i64) -> RepoResult<Vec<PopularGroup>> {
        let results = sqlx::query_as::<_, PopularGroupModel>(
            r#"
            SELECT g.id, g.name, COUNT(p.id) AS post_count
            FROM "groups" g
            LEFT JOIN posts p ON p.group_id = g.id
            GROUP BY g.id, g.name
            ORDER BY post_count DESC, g.name ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(PopularGroup::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, group: &Group) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO "groups" (id, name, description, rules, private, author_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(group.id.into_inner())
        .bind(&group.name)
        .bind(&group.description)
        .bind(&group.rules)
        .bind(group.private)
        .bind(group.author_id.into_inner())
        .bind(group.created_at)
        .bind(group.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::GroupNameTaken(group.name.clone()))
        })?;

        Ok(())
    }

    #[instrument(skip(self, description, rules))]
    async fn update_content(
        &self,
        name: &str,
        description: &str,
        rules: &[String],
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE "groups"
            SET description = $2, rules = $3, updated_at = NOW()
            WHERE name = $1
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(rules)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(group_not_found(name));
        }

        Ok(())
    }
}
