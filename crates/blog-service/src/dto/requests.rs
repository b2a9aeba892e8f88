//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Field names follow the camelCase JSON contract.

use blog_core::LikeStatus;
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Rejects values that are empty once surrounding whitespace is removed
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Must not be blank".into()));
    }
    Ok(())
}

/// Login charset: ASCII letters, digits, `_` and `-`
fn login_charset(value: &str) -> Result<(), ValidationError> {
    if value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Ok(());
    }
    Err(ValidationError::new("login_charset")
        .with_message("Login may contain only letters, digits, '_' and '-'".into()))
}

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        length(min = 3, max = 10, message = "Login must be 3-10 characters"),
        custom(function = "login_charset")
    )]
    pub login: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, max = 20, message = "Password must be 6-20 characters"))]
    pub password: String,
}

/// Login with either login or email
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(custom(function = "not_blank"))]
    pub login_or_email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

// ============================================================================
// Blog Requests
// ============================================================================

/// Create or replace a blog
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BlogInputRequest {
    #[validate(
        length(min = 1, max = 15, message = "Name must be 1-15 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,

    #[validate(
        length(min = 1, max = 500, message = "Description must be 1-500 characters"),
        custom(function = "not_blank")
    )]
    pub description: String,

    #[validate(
        url(message = "Website URL must be a valid URL"),
        length(max = 100, message = "Website URL must be at most 100 characters")
    )]
    pub website_url: String,
}

// ============================================================================
// Post Requests
// ============================================================================

/// Create or replace a post inside a blog
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PostInputRequest {
    #[validate(
        length(min = 1, max = 30, message = "Title must be 1-30 characters"),
        custom(function = "not_blank")
    )]
    pub title: String,

    #[validate(
        length(min = 1, max = 100, message = "Short description must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub short_description: String,

    #[validate(
        length(min = 1, max = 1000, message = "Content must be 1-1000 characters"),
        custom(function = "not_blank")
    )]
    pub content: String,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create or edit a comment
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CommentInputRequest {
    #[validate(length(min = 20, max = 300, message = "Content must be 20-300 characters"))]
    pub content: String,
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Desired like status; unknown values fail deserialization
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatusRequest {
    pub like_status: LikeStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterRequest {
            login: "alice_1".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_charset = RegisterRequest {
            login: "al ice".to_string(),
            ..valid.clone()
        };
        assert!(bad_charset.validate().is_err());

        let long_login = RegisterRequest {
            login: "a".repeat(11),
            ..valid.clone()
        };
        assert!(long_login.validate().is_err());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let short_password = RegisterRequest {
            password: "12345".to_string(),
            ..valid
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_blog_input_validation() {
        let valid = BlogInputRequest {
            name: "Rust notes".to_string(),
            description: "Weekly writeups".to_string(),
            website_url: "https://rust-notes.dev".to_string(),
        };
        assert!(valid.validate().is_ok());

        let blank_name = BlogInputRequest {
            name: "   ".to_string(),
            ..valid.clone()
        };
        assert!(blank_name.validate().is_err());

        let bad_url = BlogInputRequest {
            website_url: "rust notes".to_string(),
            ..valid
        };
        assert!(bad_url.validate().is_err());
    }

    #[test]
    fn test_post_input_validation() {
        let too_long_title = PostInputRequest {
            title: "t".repeat(31),
            short_description: "short".to_string(),
            content: "content".to_string(),
        };
        assert!(too_long_title.validate().is_err());
    }

    #[test]
    fn test_comment_length_bounds() {
        let short = CommentInputRequest {
            content: "too short".to_string(),
        };
        assert!(short.validate().is_err());

        let ok = CommentInputRequest {
            content: "long enough to be a real comment".to_string(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_like_status_deserialization() {
        let req: LikeStatusRequest = serde_json::from_str(r#"{"likeStatus":"Dislike"}"#).unwrap();
        assert_eq!(req.like_status, LikeStatus::Dislike);

        assert!(serde_json::from_str::<LikeStatusRequest>(r#"{"likeStatus":"Love"}"#).is_err());
        assert!(serde_json::from_str::<LikeStatusRequest>(r#"{}"#).is_err());
    }

    #[test]
    fn test_login_request_uses_camel_case() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"loginOrEmail":"alice","password":"secret1"}"#).unwrap();
        assert_eq!(req.login_or_email, "alice");
        assert!(req.validate().is_ok());
    }
}
