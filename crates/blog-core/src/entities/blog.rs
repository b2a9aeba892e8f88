//! Blog entity - an admin-managed container of posts

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::ContentState;

/// Blog entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub website_url: String,
    pub is_membership: bool,
    pub created_at: DateTime<Utc>,
    pub state: ContentState,
}

impl Blog {
    /// Create a new, active blog. Membership is always off for fresh blogs.
    pub fn new(name: String, description: String, website_url: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            website_url,
            is_membership: false,
            created_at: Utc::now(),
            state: ContentState::Active,
        }
    }

    /// Replace the editable fields
    pub fn update(&mut self, name: String, description: String, website_url: String) {
        self.name = name;
        self.description = description;
        self.website_url = website_url;
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.state.is_deleted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_blog_is_active_and_not_membership() {
        let blog = Blog::new(
            "rust".to_string(),
            "all about rust".to_string(),
            "https://rust.example.com".to_string(),
        );
        assert!(!blog.is_membership);
        assert!(!blog.is_deleted());
    }

    #[test]
    fn test_update_keeps_identity() {
        let mut blog = Blog::new(
            "rust".to_string(),
            "all about rust".to_string(),
            "https://rust.example.com".to_string(),
        );
        let id = blog.id;
        let created_at = blog.created_at;

        blog.update(
            "go".to_string(),
            "all about go".to_string(),
            "https://go.example.com".to_string(),
        );

        assert_eq!(blog.id, id);
        assert_eq!(blog.created_at, created_at);
        assert_eq!(blog.name, "go");
        assert_eq!(blog.website_url, "https://go.example.com");
    }
}
