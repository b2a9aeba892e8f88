//! Test fixtures and data generators
//!
//! Request bodies and the response shapes the tests read back.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Short random suffix; logins are capped at 10 characters
pub fn unique_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub login: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            login: format!("u{suffix}"),
            email: format!("u{suffix}@example.com"),
            password: "secret123".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub login_or_email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            login_or_email: reg.login.clone(),
            password: reg.password.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogInput {
    pub name: String,
    pub description: String,
    pub website_url: String,
}

impl BlogInput {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("blog {suffix}"),
            description: "Integration test blog".to_string(),
            website_url: format!("https://{suffix}.example.com"),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostInput {
    pub title: String,
    pub short_description: String,
    pub content: String,
}

impl PostInput {
    pub fn sample() -> Self {
        Self {
            title: "Reactions".to_string(),
            short_description: "How likes are counted".to_string(),
            content: "Every user holds at most one reaction per post.".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommentInput {
    pub content: String,
}

impl CommentInput {
    pub fn sample() -> Self {
        Self {
            content: "A comment long enough to pass validation".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatusInput {
    pub like_status: String,
}

impl LikeStatusInput {
    pub fn new(status: &str) -> Self {
        Self {
            like_status: status.to_string(),
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Me {
    pub user_id: String,
    pub login: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub pages_count: i64,
    pub page: u32,
    pub page_size: u32,
    pub total_count: i64,
    pub items: Vec<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogView {
    pub id: String,
    pub name: String,
    pub website_url: String,
    pub is_membership: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: String,
    pub title: String,
    pub blog_id: String,
    pub blog_name: String,
    pub extended_likes_info: ExtendedLikesView,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedLikesView {
    pub likes_count: i64,
    pub dislikes_count: i64,
    pub my_status: String,
    pub newest_likes: Vec<NewestLikeView>,
}

impl ExtendedLikesView {
    pub fn newest_logins(&self) -> Vec<&str> {
        self.newest_likes.iter().map(|l| l.login.as_str()).collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewestLikeView {
    pub added_at: String,
    pub user_id: String,
    pub login: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: String,
    pub content: String,
    pub commentator_info: CommentatorView,
    pub likes_info: LikesView,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentatorView {
    pub user_id: String,
    pub user_login: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikesView {
    pub likes_count: i64,
    pub dislikes_count: i64,
    pub my_status: String,
}
