//! Reaction database models

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Row of post_likes / comment_likes, with the target column aliased to `target_id`
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub user_id: Uuid,
    pub target_id: Uuid,
    pub status: String,
    pub added_at: DateTime<Utc>,
}

/// One row of the batched summary query
#[derive(Debug, Clone, FromRow)]
pub struct ReactionSummaryModel {
    pub target_id: Uuid,
    pub likes_count: i64,
    pub dislikes_count: i64,
    pub my_status: Option<String>,
    pub newest_likes: Json<Vec<RecentLikeModel>>,
}

/// Element of the `json_agg` newest-likes array
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentLikeModel {
    pub user_id: Uuid,
    pub login: String,
    pub added_at: DateTime<Utc>,
}
