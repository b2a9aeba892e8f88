//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` and emit camelCase JSON.
//! UUIDs are rendered as strings.

use blog_core::{LikeStatus, PageRequest};
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// One page of items with totals
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub pages_count: i64,
    pub page: u32,
    pub page_size: u32,
    pub total_count: i64,
    pub items: Vec<T>,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: &PageRequest, total_count: i64) -> Self {
        Self {
            pages_count: page.pages_count(total_count),
            page: page.page_number,
            page_size: page.page_size,
            total_count,
            items,
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Tokens issued on login and refresh
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokensResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

/// The authenticated user
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub user_id: String,
    pub login: String,
    pub email: String,
}

// ============================================================================
// Blog Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub website_url: String,
    pub created_at: DateTime<Utc>,
    pub is_membership: bool,
}

// ============================================================================
// Post Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub content: String,
    pub blog_id: String,
    pub blog_name: String,
    pub created_at: DateTime<Utc>,
    pub extended_likes_info: ExtendedLikesInfo,
}

/// Post reaction summary, including the newest likes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedLikesInfo {
    pub likes_count: i64,
    pub dislikes_count: i64,
    pub my_status: LikeStatus,
    pub newest_likes: Vec<NewestLike>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewestLike {
    pub added_at: DateTime<Utc>,
    pub user_id: String,
    pub login: String,
}

// ============================================================================
// Comment Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub content: String,
    pub commentator_info: CommentatorInfo,
    pub created_at: DateTime<Utc>,
    pub likes_info: LikesInfo,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentatorInfo {
    pub user_id: String,
    pub user_login: String,
}

/// Comment reaction summary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikesInfo {
    pub likes_count: i64,
    pub dislikes_count: i64,
    pub my_status: LikeStatus,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
