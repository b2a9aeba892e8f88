//! PostgreSQL implementation of BlogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use blog_core::entities::Blog;
use blog_core::error::DomainError;
use blog_core::traits::{BlogQuery, BlogRepository, RepoResult};

use crate::models::BlogModel;

use super::error::{contains_pattern, map_db_error};
use super::sorting::{blog_column, order_by};

/// PostgreSQL implementation of BlogRepository
#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogRepository for PgBlogRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Blog>> {
        let result = sqlx::query_as::<_, BlogModel>(
            r#"
            SELECT id, name, description, website_url, is_membership, created_at, deleted_at
            FROM blogs
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Blog::from))
    }

    #[instrument(skip(self))]
    async fn find_page(&self, query: &BlogQuery) -> RepoResult<Vec<Blog>> {
        let sql = format!(
            r#"
            SELECT b.id, b.name, b.description, b.website_url, b.is_membership,
                   b.created_at, b.deleted_at
            FROM blogs b
            WHERE b.deleted_at IS NULL
              AND ($1::text IS NULL OR b.name ILIKE $1)
            ORDER BY {}
            LIMIT $2 OFFSET $3
            "#,
            order_by(blog_column(query.sort_by), "b.id", query.page.direction)
        );

        let results = sqlx::query_as::<_, BlogModel>(&sql)
            .bind(contains_pattern(query.search_name_term.as_deref()))
            .bind(query.page.limit())
            .bind(query.page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Blog::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self, query: &BlogQuery) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM blogs b
            WHERE b.deleted_at IS NULL
              AND ($1::text IS NULL OR b.name ILIKE $1)
            "#,
        )
        .bind(contains_pattern(query.search_name_term.as_deref()))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn create(&self, blog: &Blog) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO blogs (id, name, description, website_url, is_membership, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(blog.id)
        .bind(&blog.name)
        .bind(&blog.description)
        .bind(&blog.website_url)
        .bind(blog.is_membership)
        .bind(blog.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, blog: &Blog) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE blogs
            SET name = $2, description = $3, website_url = $4
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(blog.id)
        .bind(&blog.name)
        .bind(&blog.description)
        .bind(&blog.website_url)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::BlogNotFound(blog.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE blogs
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::BlogNotFound(id));
        }

        Ok(())
    }
}
