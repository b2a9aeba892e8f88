//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use blog_common::{AdminCredentials, AppConfig, AppError, JwtService};
use blog_db::{
    create_pool, run_migrations, PgBlogRepository, PgCommentRepository, PgDataResetRepository,
    PgPool, PgPostRepository, PgReactionStore, PgUserRepository, PoolConfig,
};
use blog_service::{ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, MiddlewareConfig};
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let is_production = config.app.env.is_production();

    let middleware = MiddlewareConfig {
        cors: &config.cors,
        is_production,
        request_timeout: Duration::from_secs(config.api.request_timeout_secs),
    };

    if !is_production {
        warn!("Mounting DELETE /api/testing/all-data");
    }

    let router = apply_middleware(create_router(!is_production), &middleware);
    router.with_state(state)
}

/// Wire the Postgres-backed repositories into a service context
pub fn build_service_context(pool: PgPool, config: &AppConfig) -> Result<ServiceContext, AppError> {
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));
    let admin_credentials = Arc::new(AdminCredentials::from(&config.admin));

    ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .blog_repo(Arc::new(PgBlogRepository::new(pool.clone())))
        .post_repo(Arc::new(PgPostRepository::new(pool.clone())))
        .comment_repo(Arc::new(PgCommentRepository::new(pool.clone())))
        .reaction_store(Arc::new(PgReactionStore::new(pool.clone())))
        .data_reset_repo(Arc::new(PgDataResetRepository::new(pool.clone())))
        .pool(pool)
        .jwt_service(jwt_service)
        .admin_credentials(admin_credentials)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(format!("migrations failed: {e}")))?;
    }

    let service_context = build_service_context(pool, &config)?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until ctrl-c
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
