//! Comment model -> entity

use blog_core::entities::Comment;
use blog_core::value_objects::ContentState;

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            post_id: model.post_id,
            commentator_id: model.commentator_id,
            commentator_login: model.commentator_login,
            content: model.content,
            created_at: model.created_at,
            state: ContentState::from_deleted_at(model.deleted_at),
        }
    }
}
