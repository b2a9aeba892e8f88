//! Comment handlers

use axum::{extract::State, Json};
use blog_service::dto::{CommentInputRequest, CommentResponse, LikeStatusRequest};
use blog_service::CommentService;

use crate::extractors::{AuthUser, IdPath, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// GET /comments/{id}
pub async fn get_comment(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    IdPath(comment_id): IdPath,
) -> ApiResult<Json<CommentResponse>> {
    let comment = CommentService::new(state.service_context())
        .get_comment(comment_id, viewer.user_id())
        .await?;
    Ok(Json(comment))
}

/// PUT /comments/{id}
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(comment_id): IdPath,
    ValidatedJson(request): ValidatedJson<CommentInputRequest>,
) -> ApiResult<NoContent> {
    CommentService::new(state.service_context())
        .update_comment(comment_id, auth.user_id, request)
        .await?;
    Ok(NoContent)
}

/// DELETE /comments/{id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(comment_id): IdPath,
) -> ApiResult<NoContent> {
    CommentService::new(state.service_context())
        .delete_comment(comment_id, auth.user_id)
        .await?;
    Ok(NoContent)
}

/// PUT /comments/{commentId}/like-status
pub async fn set_like_status(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(comment_id): IdPath,
    ValidatedJson(request): ValidatedJson<LikeStatusRequest>,
) -> ApiResult<NoContent> {
    CommentService::new(state.service_context())
        .set_like_status(comment_id, auth.user_id, request.like_status)
        .await?;
    Ok(NoContent)
}
