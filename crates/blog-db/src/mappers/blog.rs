//! Blog model -> entity

use blog_core::entities::Blog;
use blog_core::value_objects::ContentState;

use crate::models::BlogModel;

impl From<BlogModel> for Blog {
    fn from(model: BlogModel) -> Self {
        Blog {
            id: model.id,
            name: model.name,
            description: model.description,
            website_url: model.website_url,
            is_membership: model.is_membership,
            created_at: model.created_at,
            state: ContentState::from_deleted_at(model.deleted_at),
        }
    }
}
