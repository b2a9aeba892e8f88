//! User entity - an account that can comment and react

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// User account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub login: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with a fresh id
    pub fn new(login: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            login,
            email,
            created_at: Utc::now(),
        }
    }

    /// Whether the given identifier matches this user's login or email
    pub fn matches_login_or_email(&self, login_or_email: &str) -> bool {
        self.login == login_or_email || self.email.eq_ignore_ascii_case(login_or_email)
    }
}
