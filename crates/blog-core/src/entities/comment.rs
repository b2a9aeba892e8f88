//! Comment entity - a reactable remark left by a user on a post

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::User;
use crate::value_objects::ContentState;

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub commentator_id: Uuid,
    pub commentator_login: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub state: ContentState,
}

impl Comment {
    /// Create a new comment authored by `author`
    pub fn new(post_id: Uuid, author: &User, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            post_id,
            commentator_id: author.id,
            commentator_login: author.login.clone(),
            content,
            created_at: Utc::now(),
            state: ContentState::Active,
        }
    }

    /// Check if the given user wrote this comment
    #[inline]
    pub fn is_authored_by(&self, user_id: Uuid) -> bool {
        self.commentator_id == user_id
    }

    pub fn edit(&mut self, content: String) {
        self.content = content;
    }
}
