//! Super-admin blog and post handlers
//!
//! Every handler here requires HTTP Basic admin credentials.

use axum::{extract::State, Json};
use blog_service::dto::{BlogInputRequest, BlogResponse, Paginated, PostInputRequest, PostResponse};
use blog_service::{BlogService, PostService};

use crate::extractors::{AdminAuth, IdPairPath, IdPath, ListParams, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /sa/blogs
pub async fn list_blogs(
    State(state): State<AppState>,
    _admin: AdminAuth,
    params: ListParams,
) -> ApiResult<Json<Paginated<BlogResponse>>> {
    let page = BlogService::new(state.service_context())
        .list_blogs(params.blog_query())
        .await?;
    Ok(Json(page))
}

/// POST /sa/blogs
pub async fn create_blog(
    State(state): State<AppState>,
    _admin: AdminAuth,
    ValidatedJson(request): ValidatedJson<BlogInputRequest>,
) -> ApiResult<Created<BlogResponse>> {
    let blog = BlogService::new(state.service_context()).create_blog(request).await?;
    Ok(Created(blog))
}

/// GET /sa/blogs/{id}
pub async fn get_blog(
    State(state): State<AppState>,
    _admin: AdminAuth,
    IdPath(blog_id): IdPath,
) -> ApiResult<Json<BlogResponse>> {
    let blog = BlogService::new(state.service_context()).get_blog(blog_id).await?;
    Ok(Json(blog))
}

/// PUT /sa/blogs/{id}
pub async fn update_blog(
    State(state): State<AppState>,
    _admin: AdminAuth,
    IdPath(blog_id): IdPath,
    ValidatedJson(request): ValidatedJson<BlogInputRequest>,
) -> ApiResult<NoContent> {
    BlogService::new(state.service_context())
        .update_blog(blog_id, request)
        .await?;
    Ok(NoContent)
}

/// DELETE /sa/blogs/{id}
pub async fn delete_blog(
    State(state): State<AppState>,
    _admin: AdminAuth,
    IdPath(blog_id): IdPath,
) -> ApiResult<NoContent> {
    BlogService::new(state.service_context()).delete_blog(blog_id).await?;
    Ok(NoContent)
}

/// GET /sa/blogs/{id}/posts
pub async fn list_blog_posts(
    State(state): State<AppState>,
    _admin: AdminAuth,
    viewer: OptionalAuthUser,
    IdPath(blog_id): IdPath,
    params: ListParams,
) -> ApiResult<Json<Paginated<PostResponse>>> {
    let page = PostService::new(state.service_context())
        .list_blog_posts(blog_id, params.post_query(), viewer.user_id())
        .await?;
    Ok(Json(page))
}

/// POST /sa/blogs/{id}/posts
pub async fn create_post(
    State(state): State<AppState>,
    _admin: AdminAuth,
    IdPath(blog_id): IdPath,
    ValidatedJson(request): ValidatedJson<PostInputRequest>,
) -> ApiResult<Created<PostResponse>> {
    let post = PostService::new(state.service_context())
        .create_post(blog_id, request)
        .await?;
    Ok(Created(post))
}

/// PUT /sa/blogs/{blogId}/posts/{postId}
pub async fn update_post(
    State(state): State<AppState>,
    _admin: AdminAuth,
    IdPairPath(blog_id, post_id): IdPairPath,
    ValidatedJson(request): ValidatedJson<PostInputRequest>,
) -> ApiResult<NoContent> {
    PostService::new(state.service_context())
        .update_post(blog_id, post_id, request)
        .await?;
    Ok(NoContent)
}

/// DELETE /sa/blogs/{blogId}/posts/{postId}
pub async fn delete_post(
    State(state): State<AppState>,
    _admin: AdminAuth,
    IdPairPath(blog_id, post_id): IdPairPath,
) -> ApiResult<NoContent> {
    PostService::new(state.service_context())
        .delete_post(blog_id, post_id)
        .await?;
    Ok(NoContent)
}
