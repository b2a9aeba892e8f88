//! Public blog handlers

use axum::{extract::State, Json};
use blog_service::dto::{BlogResponse, Paginated, PostResponse};
use blog_service::{BlogService, PostService};

use crate::extractors::{IdPath, ListParams, OptionalAuthUser};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /blogs
pub async fn list_blogs(
    State(state): State<AppState>,
    params: ListParams,
) -> ApiResult<Json<Paginated<BlogResponse>>> {
    let page = BlogService::new(state.service_context())
        .list_blogs(params.blog_query())
        .await?;
    Ok(Json(page))
}

/// GET /blogs/{id}
pub async fn get_blog(
    State(state): State<AppState>,
    IdPath(blog_id): IdPath,
) -> ApiResult<Json<BlogResponse>> {
    let blog = BlogService::new(state.service_context()).get_blog(blog_id).await?;
    Ok(Json(blog))
}

/// GET /blogs/{id}/posts
pub async fn list_blog_posts(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    IdPath(blog_id): IdPath,
    params: ListParams,
) -> ApiResult<Json<Paginated<PostResponse>>> {
    let page = PostService::new(state.service_context())
        .list_blog_posts(blog_id, params.post_query(), viewer.user_id())
        .await?;
    Ok(Json(page))
}
