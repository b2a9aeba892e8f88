//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

use crate::entities::TargetKind;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Blog not found: {0}")]
    BlogNotFound(Uuid),

    #[error("Post not found: {0}")]
    PostNotFound(Uuid),

    #[error("Comment not found: {0}")]
    CommentNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not comment author")]
    NotCommentAuthor,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Login already in use")]
    LoginAlreadyExists,

    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Reaction already exists for {kind} {target_id}")]
    ReactionAlreadyExists { kind: TargetKind, target_id: Uuid },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Not-found error for a reaction target of the given kind
    pub fn target_not_found(kind: TargetKind, id: Uuid) -> Self {
        match kind {
            TargetKind::Post => Self::PostNotFound(id),
            TargetKind::Comment => Self::CommentNotFound(id),
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::BlogNotFound(_) => "UNKNOWN_BLOG",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Authorization
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",

            // Conflict
            Self::LoginAlreadyExists => "LOGIN_ALREADY_EXISTS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::ReactionAlreadyExists { .. } => "REACTION_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::BlogNotFound(_) | Self::PostNotFound(_) | Self::CommentNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotCommentAuthor)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::LoginAlreadyExists
                | Self::EmailAlreadyExists
                | Self::ReactionAlreadyExists { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::PostNotFound(Uuid::nil());
        assert_eq!(err.code(), "UNKNOWN_POST");

        let err = DomainError::ReactionAlreadyExists {
            kind: TargetKind::Comment,
            target_id: Uuid::nil(),
        };
        assert_eq!(err.code(), "REACTION_ALREADY_EXISTS");
    }

    #[test]
    fn test_target_not_found() {
        let id = Uuid::new_v4();
        assert!(matches!(
            DomainError::target_not_found(TargetKind::Post, id),
            DomainError::PostNotFound(found) if found == id
        ));
        assert!(matches!(
            DomainError::target_not_found(TargetKind::Comment, id),
            DomainError::CommentNotFound(found) if found == id
        ));
    }

    #[test]
    fn test_classification() {
        assert!(DomainError::BlogNotFound(Uuid::nil()).is_not_found());
        assert!(!DomainError::EmailAlreadyExists.is_not_found());
        assert!(DomainError::NotCommentAuthor.is_authorization());
        assert!(DomainError::LoginAlreadyExists.is_conflict());
        assert!(DomainError::ValidationError("name".to_string()).is_validation());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::CommentNotFound(Uuid::nil());
        assert_eq!(
            err.to_string(),
            "Comment not found: 00000000-0000-0000-0000-000000000000"
        );

        let err = DomainError::ReactionAlreadyExists {
            kind: TargetKind::Post,
            target_id: Uuid::nil(),
        };
        assert_eq!(
            err.to_string(),
            "Reaction already exists for post 00000000-0000-0000-0000-000000000000"
        );
    }
}
