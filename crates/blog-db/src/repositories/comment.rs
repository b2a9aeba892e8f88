//! PostgreSQL implementation of CommentRepository
//!
//! A comment is only visible while its post and that post's blog are live.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use blog_core::entities::Comment;
use blog_core::error::DomainError;
use blog_core::traits::{CommentQuery, CommentRepository, RepoResult};

use crate::models::CommentModel;

use super::error::{map_constraint_violation, map_db_error};
use super::sorting::{comment_column, order_by};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT c.id, c.post_id, c.commentator_id, u.login AS commentator_login,
                   c.content, c.created_at, c.deleted_at
            FROM comments c
            JOIN users u ON u.id = c.commentator_id
            JOIN posts p ON p.id = c.post_id AND p.deleted_at IS NULL
            JOIN blogs b ON b.id = p.blog_id AND b.deleted_at IS NULL
            WHERE c.id = $1 AND c.deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_page(&self, query: &CommentQuery) -> RepoResult<Vec<Comment>> {
        let sql = format!(
            r#"
            SELECT c.id, c.post_id, c.commentator_id, u.login AS commentator_login,
                   c.content, c.created_at, c.deleted_at
            FROM comments c
            JOIN users u ON u.id = c.commentator_id
            JOIN posts p ON p.id = c.post_id AND p.deleted_at IS NULL
            JOIN blogs b ON b.id = p.blog_id AND b.deleted_at IS NULL
            WHERE c.post_id = $1 AND c.deleted_at IS NULL
            ORDER BY {}
            LIMIT $2 OFFSET $3
            "#,
            order_by(comment_column(query.sort_by), "c.id", query.page.direction)
        );

        let results = sqlx::query_as::<_, CommentModel>(&sql)
            .bind(query.post_id)
            .bind(query.page.limit())
            .bind(query.page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self, query: &CommentQuery) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM comments c
            JOIN posts p ON p.id = c.post_id AND p.deleted_at IS NULL
            JOIN blogs b ON b.id = p.blog_id AND b.deleted_at IS NULL
            WHERE c.post_id = $1 AND c.deleted_at IS NULL
            "#,
        )
        .bind(query.post_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, post_id, commentator_id, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.id)
        .bind(comment.post_id)
        .bind(comment.commentator_id)
        .bind(&comment.content)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_constraint_violation(
                e,
                || DomainError::InternalError(format!("duplicate comment id {}", comment.id)),
                || DomainError::PostNotFound(comment.post_id),
            )
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, comment: &Comment) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE comments
            SET content = $2
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(comment.id)
        .bind(&comment.content)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound(comment.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE comments
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound(id));
        }

        Ok(())
    }
}
