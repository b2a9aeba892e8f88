//! Authentication service
//!
//! Handles user registration, login, token refresh and the current-user view.

use blog_common::auth::{hash_password, validate_password_length, verify_password};
use blog_common::AppError;
use blog_core::{DomainError, User};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{AuthTokensResponse, LoginRequest, MeResponse, RefreshTokenRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user.
    ///
    /// A taken login or email is reported as a validation failure on that field.
    #[instrument(skip(self, request), fields(login = %request.login, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<()> {
        validate_password_length(&request.password)?;

        let users = self.ctx.user_repo();
        let (login_taken, email_taken) = tokio::try_join!(
            users.login_exists(&request.login),
            users.email_exists(&request.email)
        )?;
        if login_taken {
            return Err(ServiceError::validation("login: already taken"));
        }
        if email_taken {
            return Err(ServiceError::validation("email: already taken"));
        }

        let password_hash = hash_password(&request.password)?;
        let user = User::new(request.login, request.email);

        // A concurrent registration may still win the unique index
        match users.create(&user, &password_hash).await {
            Ok(()) => {}
            Err(DomainError::LoginAlreadyExists) => {
                return Err(ServiceError::validation("login: already taken"));
            }
            Err(DomainError::EmailAlreadyExists) => {
                return Err(ServiceError::validation("email: already taken"));
            }
            Err(e) => return Err(e.into()),
        }

        info!(user_id = %user.id, "User registered");

        Ok(())
    }

    /// Login with login or email and password
    #[instrument(skip(self, request), fields(login_or_email = %request.login_or_email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthTokensResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_login_or_email(request.login_or_email.trim())
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !verify_password(&request.password, &password_hash)? {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let tokens = self.ctx.jwt_service().generate_token_pair(user.id)?;

        info!(user_id = %user.id, "User logged in");

        Ok(tokens.into())
    }

    /// Exchange a refresh token for a new token pair
    #[instrument(skip(self, request))]
    pub async fn refresh(&self, request: RefreshTokenRequest) -> ServiceResult<AuthTokensResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)?;
        let user_id = claims.user_id()?;

        if self.ctx.user_repo().find_by_id(user_id).await?.is_none() {
            warn!(user_id = %user_id, "Refresh for unknown user");
            return Err(ServiceError::App(AppError::InvalidToken));
        }

        let tokens = self.ctx.jwt_service().generate_token_pair(user_id)?;

        info!(user_id = %user_id, "Tokens refreshed");

        Ok(tokens.into())
    }

    /// Resolve a bearer access token to a user ID
    pub fn authenticate(&self, access_token: &str) -> ServiceResult<Uuid> {
        let claims = self.ctx.jwt_service().validate_access_token(access_token)?;
        Ok(claims.user_id()?)
    }

    /// The current user's profile
    #[instrument(skip(self))]
    pub async fn me(&self, user_id: Uuid) -> ServiceResult<MeResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::unauthorized("user no longer exists"))?;

        Ok(MeResponse::from(&user))
    }
}
