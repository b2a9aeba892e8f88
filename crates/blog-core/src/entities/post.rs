//! Post entity - a reactable article that belongs to a blog

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Blog;
use crate::value_objects::ContentState;

/// Post entity
///
/// `blog_name` is denormalized on read from the owning blog and is never written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Uuid,
    pub blog_id: Uuid,
    pub blog_name: String,
    pub title: String,
    pub short_description: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub state: ContentState,
}

impl Post {
    /// Create a new post inside the given blog
    pub fn new(blog: &Blog, title: String, short_description: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            blog_id: blog.id,
            blog_name: blog.name.clone(),
            title,
            short_description,
            content,
            created_at: Utc::now(),
            state: ContentState::Active,
        }
    }

    /// Replace the editable fields
    pub fn update(&mut self, title: String, short_description: String, content: String) {
        self.title = title;
        self.short_description = short_description;
        self.content = content;
    }

    /// Check if the post lives in the given blog
    #[inline]
    pub fn belongs_to(&self, blog_id: Uuid) -> bool {
        self.blog_id == blog_id
    }
}
