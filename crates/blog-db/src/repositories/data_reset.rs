//! Wipes all application tables. Backs the testing endpoint.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{instrument, warn};

use blog_core::traits::{DataResetRepository, RepoResult};

use super::error::map_db_error;

#[derive(Clone)]
pub struct PgDataResetRepository {
    pool: PgPool,
}

impl PgDataResetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DataResetRepository for PgDataResetRepository {
    #[instrument(skip(self))]
    async fn clear_all(&self) -> RepoResult<()> {
        sqlx::query(
            r#"
            TRUNCATE TABLE comment_likes, post_likes, comments, posts, blogs, users
            RESTART IDENTITY CASCADE
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        warn!("All application data truncated");
        Ok(())
    }
}
