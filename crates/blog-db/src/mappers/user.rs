//! User model -> entity

use blog_core::entities::User;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            login: model.login,
            email: model.email,
            created_at: model.created_at,
        }
    }
}
