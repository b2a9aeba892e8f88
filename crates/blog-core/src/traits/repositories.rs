//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use super::queries::{BlogQuery, CommentQuery, PostQuery};
use crate::entities::{Blog, Comment, Post, Reaction, ReactionSummary, TargetKind, User};
use crate::error::DomainError;
use crate::value_objects::ReactionStatus;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user whose login or email equals the given value
    async fn find_by_login_or_email(&self, login_or_email: &str) -> RepoResult<Option<User>>;

    /// Check if login is already taken
    async fn login_exists(&self, login: &str) -> RepoResult<bool>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;
}

// ============================================================================
// Blog Repository
// ============================================================================

#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Find an active blog by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Blog>>;

    /// One page of active blogs
    async fn find_page(&self, query: &BlogQuery) -> RepoResult<Vec<Blog>>;

    /// Total number of active blogs matching the query filters
    async fn count(&self, query: &BlogQuery) -> RepoResult<i64>;

    /// Create a new blog
    async fn create(&self, blog: &Blog) -> RepoResult<()>;

    /// Update an existing blog
    async fn update(&self, blog: &Blog) -> RepoResult<()>;

    /// Soft delete a blog
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find an active post of an active blog by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Post>>;

    /// One page of active posts
    async fn find_page(&self, query: &PostQuery) -> RepoResult<Vec<Post>>;

    /// Total number of active posts matching the query filters
    async fn count(&self, query: &PostQuery) -> RepoResult<i64>;

    /// Create a new post
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Update an existing post
    async fn update(&self, post: &Post) -> RepoResult<()>;

    /// Soft delete a post
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find an active comment by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Comment>>;

    /// One page of active comments for a post
    async fn find_page(&self, query: &CommentQuery) -> RepoResult<Vec<Comment>>;

    /// Total number of active comments for a post
    async fn count(&self, query: &CommentQuery) -> RepoResult<i64>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Update comment content
    async fn update(&self, comment: &Comment) -> RepoResult<()>;

    /// Soft delete a comment
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Reaction Store
// ============================================================================

/// Durable like/dislike rows, one per (actor, target) pair and target kind.
///
/// A `None` status is represented by the absence of a row.
#[async_trait]
pub trait ReactionStore: Send + Sync {
    /// Find the actor's reaction to a target
    async fn find_one(
        &self,
        kind: TargetKind,
        actor_id: Uuid,
        target_id: Uuid,
    ) -> RepoResult<Option<Reaction>>;

    /// Insert a reaction.
    ///
    /// Fails with [`DomainError::ReactionAlreadyExists`] if the pair already has a row.
    async fn create(
        &self,
        kind: TargetKind,
        actor_id: Uuid,
        target_id: Uuid,
        status: ReactionStatus,
    ) -> RepoResult<Reaction>;

    /// Change the status of an existing reaction and refresh its `reacted_at`.
    ///
    /// Returns `None` without writing if the pair has no row.
    async fn update_status(
        &self,
        kind: TargetKind,
        actor_id: Uuid,
        target_id: Uuid,
        status: ReactionStatus,
    ) -> RepoResult<Option<Reaction>>;

    /// Remove a reaction, returning whether a row was deleted
    async fn delete(&self, kind: TargetKind, actor_id: Uuid, target_id: Uuid) -> RepoResult<bool>;

    /// Summaries for every existing, non-deleted target in `target_ids`, in one read.
    ///
    /// Targets without reactions are present with zero counts. Targets that do not
    /// exist or are soft-deleted are absent. `viewer_id = None` never looks up a status.
    async fn batch_summarize(
        &self,
        kind: TargetKind,
        target_ids: &[Uuid],
        viewer_id: Option<Uuid>,
    ) -> RepoResult<HashMap<Uuid, ReactionSummary>>;
}

// ============================================================================
// Data Reset
// ============================================================================

#[async_trait]
pub trait DataResetRepository: Send + Sync {
    /// Remove every row from every application table
    async fn clear_all(&self) -> RepoResult<()>;
}
