//! PostgreSQL implementation of PostRepository
//!
//! Posts of a soft-deleted blog are hidden together with the blog.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use blog_core::entities::Post;
use blog_core::error::DomainError;
use blog_core::traits::{PostQuery, PostRepository, RepoResult};

use crate::models::PostModel;

use super::error::{contains_pattern, map_constraint_violation, map_db_error};
use super::sorting::{order_by, post_column};

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT p.id, p.blog_id, b.name AS blog_name, p.title, p.short_description,
                   p.content, p.created_at, p.deleted_at
            FROM posts p
            JOIN blogs b ON b.id = p.blog_id AND b.deleted_at IS NULL
            WHERE p.id = $1 AND p.deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn find_page(&self, query: &PostQuery) -> RepoResult<Vec<Post>> {
        let sql = format!(
            r#"
            SELECT p.id, p.blog_id, b.name AS blog_name, p.title, p.short_description,
                   p.content, p.created_at, p.deleted_at
            FROM posts p
            JOIN blogs b ON b.id = p.blog_id AND b.deleted_at IS NULL
            WHERE p.deleted_at IS NULL
              AND ($1::uuid IS NULL OR p.blog_id = $1)
              AND ($2::text IS NULL OR p.title ILIKE $2)
            ORDER BY {}
            LIMIT $3 OFFSET $4
            "#,
            order_by(post_column(query.sort_by), "p.id", query.page.direction)
        );

        let results = sqlx::query_as::<_, PostModel>(&sql)
            .bind(query.blog_id)
            .bind(contains_pattern(query.search_title_term.as_deref()))
            .bind(query.page.limit())
            .bind(query.page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self, query: &PostQuery) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM posts p
            JOIN blogs b ON b.id = p.blog_id AND b.deleted_at IS NULL
            WHERE p.deleted_at IS NULL
              AND ($1::uuid IS NULL OR p.blog_id = $1)
              AND ($2::text IS NULL OR p.title ILIKE $2)
            "#,
        )
        .bind(query.blog_id)
        .bind(contains_pattern(query.search_title_term.as_deref()))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, blog_id, title, short_description, content, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(post.id)
        .bind(post.blog_id)
        .bind(&post.title)
        .bind(&post.short_description)
        .bind(&post.content)
        .bind(post.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_constraint_violation(
                e,
                || DomainError::InternalError(format!("duplicate post id {}", post.id)),
                || DomainError::BlogNotFound(post.blog_id),
            )
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, post: &Post) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = $2, short_description = $3, content = $4
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.short_description)
        .bind(&post.content)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PostNotFound(post.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PostNotFound(id));
        }

        Ok(())
    }
}
