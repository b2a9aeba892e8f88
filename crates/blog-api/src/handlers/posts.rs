//! Public post handlers and post like status

use axum::{extract::State, Json};
use blog_service::dto::{
    CommentInputRequest, CommentResponse, LikeStatusRequest, Paginated, PostResponse,
};
use blog_service::{CommentService, PostService};

use crate::extractors::{AuthUser, IdPath, ListParams, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /posts
pub async fn list_posts(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    params: ListParams,
) -> ApiResult<Json<Paginated<PostResponse>>> {
    let page = PostService::new(state.service_context())
        .list_posts(params.post_query(), viewer.user_id())
        .await?;
    Ok(Json(page))
}

/// GET /posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    IdPath(post_id): IdPath,
) -> ApiResult<Json<PostResponse>> {
    let post = PostService::new(state.service_context())
        .get_post(post_id, viewer.user_id())
        .await?;
    Ok(Json(post))
}

/// PUT /posts/{postId}/like-status
pub async fn set_like_status(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath,
    ValidatedJson(request): ValidatedJson<LikeStatusRequest>,
) -> ApiResult<NoContent> {
    PostService::new(state.service_context())
        .set_like_status(post_id, auth.user_id, request.like_status)
        .await?;
    Ok(NoContent)
}

/// GET /posts/{postId}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    IdPath(post_id): IdPath,
    params: ListParams,
) -> ApiResult<Json<Paginated<CommentResponse>>> {
    let page = CommentService::new(state.service_context())
        .list_post_comments(params.comment_query(post_id), viewer.user_id())
        .await?;
    Ok(Json(page))
}

/// POST /posts/{postId}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath,
    ValidatedJson(request): ValidatedJson<CommentInputRequest>,
) -> ApiResult<Created<CommentResponse>> {
    let comment = CommentService::new(state.service_context())
        .create_comment(post_id, auth.user_id, request)
        .await?;
    Ok(Created(comment))
}
