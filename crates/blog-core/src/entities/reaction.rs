//! Reaction entity - one actor's stance toward one post or comment
//!
//! A logical `None` status is never stored: it is the absence of a reaction row.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::{LikeStatus, ReactionStatus};

/// Maximum number of entries in [`ReactionSummary::recent_likes`]
pub const RECENT_LIKES_LIMIT: usize = 3;

/// Kind of reactable target. Reactions of different kinds never share counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Post,
    Comment,
}

impl TargetKind {
    /// Whether summaries for this kind carry recent likes
    #[inline]
    pub const fn tracks_recent_likes(self) -> bool {
        matches!(self, Self::Post)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Comment => "comment",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored reaction row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub actor_id: Uuid,
    pub target_id: Uuid,
    pub status: ReactionStatus,
    /// Time of the latest status-setting action, not only the first one
    pub reacted_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction stamped with the current time
    pub fn new(actor_id: Uuid, target_id: Uuid, status: ReactionStatus) -> Self {
        Self {
            actor_id,
            target_id,
            status,
            reacted_at: Utc::now(),
        }
    }
}

/// One of the newest positive reactions on a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentLike {
    pub actor_id: Uuid,
    pub actor_login: String,
    pub reacted_at: DateTime<Utc>,
}

/// Derived read-model for a single target, recomputed on every read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionSummary {
    pub like_count: i64,
    pub dislike_count: i64,
    pub viewer_status: LikeStatus,
    /// Newest first, at most [`RECENT_LIKES_LIMIT`] entries. Always empty for comments.
    pub recent_likes: Vec<RecentLike>,
}

impl ReactionSummary {
    /// Summary of a target nobody has reacted to
    pub fn empty() -> Self {
        Self {
            like_count: 0,
            dislike_count: 0,
            viewer_status: LikeStatus::None,
            recent_likes: Vec::new(),
        }
    }
}

impl Default for ReactionSummary {
    fn default() -> Self {
        Self::empty()
    }
}
