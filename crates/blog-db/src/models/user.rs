//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Row of the users table, without the password hash
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: Uuid,
    pub login: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
