//! Soft-delete state of blogs, posts and comments

use chrono::{DateTime, Utc};

/// Lifecycle state of a content record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentState {
    #[default]
    Active,
    Deleted { at: DateTime<Utc> },
}

impl ContentState {
    /// Build from the nullable deletion timestamp column
    pub fn from_deleted_at(deleted_at: Option<DateTime<Utc>>) -> Self {
        match deleted_at {
            Some(at) => Self::Deleted { at },
            None => Self::Active,
        }
    }

    /// Inverse of [`ContentState::from_deleted_at`]
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Active => None,
            Self::Deleted { at } => Some(*at),
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        !self.is_active()
    }
}
