//! Post model -> entity

use blog_core::entities::Post;
use blog_core::value_objects::ContentState;

use crate::models::PostModel;

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: model.id,
            blog_id: model.blog_id,
            blog_name: model.blog_name,
            title: model.title,
            short_description: model.short_description,
            content: model.content,
            created_at: model.created_at,
            state: ContentState::from_deleted_at(model.deleted_at),
        }
    }
}
