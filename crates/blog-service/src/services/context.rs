//! Service context - dependency container for services
//!
//! Holds the repositories, the reaction store and the auth collaborators
//! needed by services.

use std::sync::Arc;

use blog_common::auth::{AdminCredentials, JwtService};
use blog_core::traits::{
    BlogRepository, CommentRepository, DataResetRepository, PostRepository, ReactionStore,
    UserRepository,
};
use blog_db::PgPool;
use tracing::instrument;

use super::error::{ServiceError, ServiceResult};
use crate::reaction::{ReactionAggregator, ReactionCommandProcessor};

/// Service context containing all dependencies
///
/// Cheap to clone: every collaborator sits behind an `Arc` or is a pool handle.
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    blog_repo: Arc<dyn BlogRepository>,
    post_repo: Arc<dyn PostRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reaction_store: Arc<dyn ReactionStore>,
    data_reset_repo: Arc<dyn DataResetRepository>,

    // Auth
    jwt_service: Arc<JwtService>,
    admin_credentials: Arc<AdminCredentials>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        blog_repo: Arc<dyn BlogRepository>,
        post_repo: Arc<dyn PostRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        reaction_store: Arc<dyn ReactionStore>,
        data_reset_repo: Arc<dyn DataResetRepository>,
        jwt_service: Arc<JwtService>,
        admin_credentials: Arc<AdminCredentials>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            blog_repo,
            post_repo,
            comment_repo,
            reaction_store,
            data_reset_repo,
            jwt_service,
            admin_credentials,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Round trip to the database, used by readiness probes
    #[instrument(skip(self))]
    pub async fn ping_database(&self) -> ServiceResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| ServiceError::internal(e.to_string()))
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn blog_repo(&self) -> &dyn BlogRepository {
        self.blog_repo.as_ref()
    }

    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    pub fn data_reset_repo(&self) -> &dyn DataResetRepository {
        self.data_reset_repo.as_ref()
    }

    // === Reactions ===

    /// Read side of the reaction core
    pub fn reaction_aggregator(&self) -> ReactionAggregator<'_> {
        ReactionAggregator::new(self.reaction_store.as_ref())
    }

    /// Write side of the reaction core
    pub fn reaction_commands(&self) -> ReactionCommandProcessor<'_> {
        ReactionCommandProcessor::new(self.reaction_store.as_ref())
    }

    // === Auth ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the super-admin Basic credentials
    pub fn admin_credentials(&self) -> &AdminCredentials {
        self.admin_credentials.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("jwt_service", &"JwtService")
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    blog_repo: Option<Arc<dyn BlogRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    reaction_store: Option<Arc<dyn ReactionStore>>,
    data_reset_repo: Option<Arc<dyn DataResetRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    admin_credentials: Option<Arc<AdminCredentials>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn blog_repo(mut self, repo: Arc<dyn BlogRepository>) -> Self {
        self.blog_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn reaction_store(mut self, store: Arc<dyn ReactionStore>) -> Self {
        self.reaction_store = Some(store);
        self
    }

    pub fn data_reset_repo(mut self, repo: Arc<dyn DataResetRepository>) -> Self {
        self.data_reset_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn admin_credentials(mut self, credentials: Arc<AdminCredentials>) -> Self {
        self.admin_credentials = Some(credentials);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        Ok(ServiceContext::new(
            required(self.pool, "pool")?,
            required(self.user_repo, "user_repo")?,
            required(self.blog_repo, "blog_repo")?,
            required(self.post_repo, "post_repo")?,
            required(self.comment_repo, "comment_repo")?,
            required(self.reaction_store, "reaction_store")?,
            required(self.data_reset_repo, "data_reset_repo")?,
            required(self.jwt_service, "jwt_service")?,
            required(self.admin_credentials, "admin_credentials")?,
        ))
    }
}
