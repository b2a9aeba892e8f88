//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.
//! Posts and comments are combined with their reaction summary.

use blog_common::TokenPair;
use blog_core::{Blog, Comment, Post, ReactionSummary, RecentLike, User};

use super::responses::{
    AuthTokensResponse, BlogResponse, CommentResponse, CommentatorInfo, ExtendedLikesInfo,
    LikesInfo, MeResponse, NewestLike, PostResponse,
};

// ============================================================================
// User / Auth Mappers
// ============================================================================

impl From<&User> for MeResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id.to_string(),
            login: user.login.clone(),
            email: user.email.clone(),
        }
    }
}

impl From<TokenPair> for AuthTokensResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            expires_in: pair.expires_in,
        }
    }
}

// ============================================================================
// Blog Mappers
// ============================================================================

impl From<&Blog> for BlogResponse {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id.to_string(),
            name: blog.name.clone(),
            description: blog.description.clone(),
            website_url: blog.website_url.clone(),
            created_at: blog.created_at,
            is_membership: blog.is_membership,
        }
    }
}

impl From<Blog> for BlogResponse {
    fn from(blog: Blog) -> Self {
        Self::from(&blog)
    }
}

// ============================================================================
// Reaction Mappers
// ============================================================================

impl From<RecentLike> for NewestLike {
    fn from(like: RecentLike) -> Self {
        Self {
            added_at: like.reacted_at,
            user_id: like.actor_id.to_string(),
            login: like.actor_login,
        }
    }
}

impl From<ReactionSummary> for ExtendedLikesInfo {
    fn from(summary: ReactionSummary) -> Self {
        Self {
            likes_count: summary.like_count,
            dislikes_count: summary.dislike_count,
            my_status: summary.viewer_status,
            newest_likes: summary.recent_likes.into_iter().map(NewestLike::from).collect(),
        }
    }
}

impl From<ReactionSummary> for LikesInfo {
    fn from(summary: ReactionSummary) -> Self {
        Self {
            likes_count: summary.like_count,
            dislikes_count: summary.dislike_count,
            my_status: summary.viewer_status,
        }
    }
}

// ============================================================================
// Post / Comment Mappers
// ============================================================================

impl PostResponse {
    pub fn new(post: Post, summary: ReactionSummary) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            short_description: post.short_description,
            content: post.content,
            blog_id: post.blog_id.to_string(),
            blog_name: post.blog_name,
            created_at: post.created_at,
            extended_likes_info: summary.into(),
        }
    }
}

impl CommentResponse {
    pub fn new(comment: Comment, summary: ReactionSummary) -> Self {
        Self {
            id: comment.id.to_string(),
            content: comment.content,
            commentator_info: CommentatorInfo {
                user_id: comment.commentator_id.to_string(),
                user_login: comment.commentator_login,
            },
            created_at: comment.created_at,
            likes_info: summary.into(),
        }
    }
}
