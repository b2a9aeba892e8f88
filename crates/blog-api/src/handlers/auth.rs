//! Authentication handlers
//!
//! Endpoints for registration, login, token refresh and the current user.

use axum::{extract::State, Json};
use blog_service::dto::{
    AuthTokensResponse, LoginRequest, MeResponse, RefreshTokenRequest, RegisterRequest,
};
use blog_service::AuthService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Register a new user
///
/// POST /auth/registration
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<NoContent> {
    AuthService::new(state.service_context()).register(request).await?;
    Ok(NoContent)
}

/// Login with login or email and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthTokensResponse>> {
    let tokens = AuthService::new(state.service_context()).login(request).await?;
    Ok(Json(tokens))
}

/// Exchange a refresh token for a new pair
///
/// POST /auth/refresh-token
pub async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RefreshTokenRequest>,
) -> ApiResult<Json<AuthTokensResponse>> {
    let tokens = AuthService::new(state.service_context()).refresh(request).await?;
    Ok(Json(tokens))
}

/// Current user
///
/// GET /auth/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<MeResponse>> {
    let me = AuthService::new(state.service_context()).me(auth.user_id).await?;
    Ok(Json(me))
}
