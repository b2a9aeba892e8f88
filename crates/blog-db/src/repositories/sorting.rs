//! Whitelisted ORDER BY clauses for list queries

use blog_core::traits::{BlogSortField, CommentSortField, PostSortField};
use blog_core::value_objects::SortDirection;

pub fn blog_column(field: BlogSortField) -> &'static str {
    match field {
        BlogSortField::CreatedAt => "b.created_at",
        BlogSortField::Name => "b.name",
        BlogSortField::Description => "b.description",
        BlogSortField::WebsiteUrl => "b.website_url",
        BlogSortField::IsMembership => "b.is_membership",
    }
}

pub fn post_column(field: PostSortField) -> &'static str {
    match field {
        PostSortField::CreatedAt => "p.created_at",
        PostSortField::Title => "p.title",
        PostSortField::ShortDescription => "p.short_description",
        PostSortField::Content => "p.content",
        PostSortField::BlogId => "p.blog_id",
        PostSortField::BlogName => "b.name",
    }
}

pub fn comment_column(field: CommentSortField) -> &'static str {
    match field {
        CommentSortField::CreatedAt => "c.created_at",
        CommentSortField::Content => "c.content",
    }
}

/// `ORDER BY` body with the row id as tie-breaker so pages never overlap
pub fn order_by(column: &str, id_column: &str, direction: SortDirection) -> String {
    let dir = direction.as_sql();
    format!("{column} {dir}, {id_column} {dir}")
}
