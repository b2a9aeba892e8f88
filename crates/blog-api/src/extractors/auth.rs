//! Authentication extractors
//!
//! Bearer JWTs for users and HTTP Basic credentials for the admin surface.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{
        authorization::{Basic, Bearer},
        Authorization,
    },
    TypedHeader,
};
use tracing::warn;
use uuid::Uuid;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from JWT token
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Uuid,
}

impl AuthUser {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}

fn user_from_bearer(state: &AppState, token: &str) -> Result<AuthUser, ApiError> {
    let claims = state.jwt_service().validate_access_token(token).map_err(|e| {
        warn!(error = %e, "Invalid access token");
        ApiError::InvalidToken
    })?;

    let user_id = claims.user_id().map_err(|e| {
        warn!(error = %e, "Invalid user ID in token");
        ApiError::InvalidToken
    })?;

    Ok(AuthUser::new(user_id))
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        user_from_bearer(&AppState::from_ref(state), bearer.token())
    }
}

/// Viewer identity on public routes.
///
/// A missing, malformed or expired token yields an anonymous viewer.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    pub fn user_id(&self) -> Option<Uuid> {
        self.0.map(|u| u.user_id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Ok(TypedHeader(Authorization(bearer))) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await
        else {
            return Ok(Self(None));
        };

        Ok(Self(user_from_bearer(&AppState::from_ref(state), bearer.token()).ok()))
    }
}

/// Super admin authenticated with HTTP Basic credentials
#[derive(Debug, Clone, Copy)]
pub struct AdminAuth;

#[async_trait]
impl<S> FromRequestParts<S> for AdminAuth
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(basic)) =
            TypedHeader::<Authorization<Basic>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InvalidAdminCredentials)?;

        AppState::from_ref(state)
            .admin_credentials()
            .verify(basic.username(), basic.password())
            .map_err(|_| {
                warn!("Admin authentication failed");
                ApiError::InvalidAdminCredentials
            })?;

        Ok(AdminAuth)
    }
}
