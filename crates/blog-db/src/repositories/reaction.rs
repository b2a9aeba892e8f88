//! PostgreSQL implementation of ReactionStore
//!
//! Post and comment reactions live in separate tables (`post_likes`, `comment_likes`)
//! so their counts can never mix. Each kind has its own fixed statement set.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use blog_core::entities::{Reaction, ReactionSummary, TargetKind};
use blog_core::error::DomainError;
use blog_core::traits::{ReactionStore, RepoResult};
use blog_core::value_objects::ReactionStatus;

use crate::models::{ReactionModel, ReactionSummaryModel};

use super::error::{map_constraint_violation, map_db_error};

/// Statements for one reaction table
struct ReactionSql {
    find_one: &'static str,
    insert: &'static str,
    update_status: &'static str,
    delete: &'static str,
    batch_summarize: &'static str,
}

const POST_SQL: ReactionSql = ReactionSql {
    find_one: r#"
        SELECT user_id, post_id AS target_id, status, added_at
        FROM post_likes
        WHERE user_id = $1 AND post_id = $2
        "#,
    insert: r#"
        INSERT INTO post_likes (user_id, post_id, status, added_at)
        VALUES ($1, $2, $3, NOW())
        RETURNING user_id, post_id AS target_id, status, added_at
        "#,
    update_status: r#"
        UPDATE post_likes
        SET status = $3, added_at = NOW()
        WHERE user_id = $1 AND post_id = $2
        RETURNING user_id, post_id AS target_id, status, added_at
        "#,
    delete: "DELETE FROM post_likes WHERE user_id = $1 AND post_id = $2",
    // Newest likes: at most 3 per post, newest first, user id breaks ties.
    batch_summarize: r#"
        SELECT p.id AS target_id,
               counts.likes_count,
               counts.dislikes_count,
               viewer.status AS my_status,
               COALESCE(newest.likes, '[]'::json) AS newest_likes
        FROM posts p
        CROSS JOIN LATERAL (
            SELECT COUNT(*) FILTER (WHERE l.status = 'Like') AS likes_count,
                   COUNT(*) FILTER (WHERE l.status = 'Dislike') AS dislikes_count
            FROM post_likes l
            WHERE l.post_id = p.id
        ) counts
        LEFT JOIN post_likes viewer
               ON viewer.post_id = p.id AND viewer.user_id = $2
        LEFT JOIN LATERAL (
            SELECT json_agg(
                       json_build_object('userId', r.user_id, 'login', r.login, 'addedAt', r.added_at)
                       ORDER BY r.added_at DESC, r.user_id ASC
                   ) AS likes
            FROM (
                SELECT l.user_id, u.login, l.added_at
                FROM post_likes l
                JOIN users u ON u.id = l.user_id
                WHERE l.post_id = p.id AND l.status = 'Like'
                ORDER BY l.added_at DESC, l.user_id ASC
                LIMIT 3
            ) r
        ) newest ON TRUE
        JOIN blogs b ON b.id = p.blog_id AND b.deleted_at IS NULL
        WHERE p.id = ANY($1) AND p.deleted_at IS NULL
        "#,
};

const COMMENT_SQL: ReactionSql = ReactionSql {
    find_one: r#"
        SELECT user_id, comment_id AS target_id, status, added_at
        FROM comment_likes
        WHERE user_id = $1 AND comment_id = $2
        "#,
    insert: r#"
        INSERT INTO comment_likes (user_id, comment_id, status, added_at)
        VALUES ($1, $2, $3, NOW())
        RETURNING user_id, comment_id AS target_id, status, added_at
        "#,
    update_status: r#"
        UPDATE comment_likes
        SET status = $3, added_at = NOW()
        WHERE user_id = $1 AND comment_id = $2
        RETURNING user_id, comment_id AS target_id, status, added_at
        "#,
    delete: "DELETE FROM comment_likes WHERE user_id = $1 AND comment_id = $2",
    batch_summarize: r#"
        SELECT c.id AS target_id,
               counts.likes_count,
               counts.dislikes_count,
               viewer.status AS my_status,
               '[]'::json AS newest_likes
        FROM comments c
        CROSS JOIN LATERAL (
            SELECT COUNT(*) FILTER (WHERE l.status = 'Like') AS likes_count,
                   COUNT(*) FILTER (WHERE l.status = 'Dislike') AS dislikes_count
            FROM comment_likes l
            WHERE l.comment_id = c.id
        ) counts
        LEFT JOIN comment_likes viewer
               ON viewer.comment_id = c.id AND viewer.user_id = $2
        JOIN posts p ON p.id = c.post_id AND p.deleted_at IS NULL
        JOIN blogs b ON b.id = p.blog_id AND b.deleted_at IS NULL
        WHERE c.id = ANY($1) AND c.deleted_at IS NULL
        "#,
};

const fn statements(kind: TargetKind) -> &'static ReactionSql {
    match kind {
        TargetKind::Post => &POST_SQL,
        TargetKind::Comment => &COMMENT_SQL,
    }
}

/// PostgreSQL implementation of ReactionStore
#[derive(Clone)]
pub struct PgReactionStore {
    pool: PgPool,
}

impl PgReactionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionStore for PgReactionStore {
    #[instrument(skip(self))]
    async fn find_one(
        &self,
        kind: TargetKind,
        actor_id: Uuid,
        target_id: Uuid,
    ) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(statements(kind).find_one)
            .bind(actor_id)
            .bind(target_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn create(
        &self,
        kind: TargetKind,
        actor_id: Uuid,
        target_id: Uuid,
        status: ReactionStatus,
    ) -> RepoResult<Reaction> {
        let model = sqlx::query_as::<_, ReactionModel>(statements(kind).insert)
            .bind(actor_id)
            .bind(target_id)
            .bind(status.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                map_constraint_violation(
                    e,
                    || DomainError::ReactionAlreadyExists { kind, target_id },
                    || DomainError::target_not_found(kind, target_id),
                )
            })?;

        Reaction::try_from(model)
    }

    #[instrument(skip(self))]
    async fn update_status(
        &self,
        kind: TargetKind,
        actor_id: Uuid,
        target_id: Uuid,
        status: ReactionStatus,
    ) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(statements(kind).update_status)
            .bind(actor_id)
            .bind(target_id)
            .bind(status.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn delete(&self, kind: TargetKind, actor_id: Uuid, target_id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query(statements(kind).delete)
            .bind(actor_id)
            .bind(target_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, target_ids), fields(targets = target_ids.len()))]
    async fn batch_summarize(
        &self,
        kind: TargetKind,
        target_ids: &[Uuid],
        viewer_id: Option<Uuid>,
    ) -> RepoResult<HashMap<Uuid, ReactionSummary>> {
        if target_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, ReactionSummaryModel>(statements(kind).batch_summarize)
            .bind(target_ids)
            .bind(viewer_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter()
            .map(|row| {
                let target_id = row.target_id;
                ReactionSummary::try_from(row).map(|summary| (target_id, summary))
            })
            .collect()
    }
}
