//! Route definitions
//!
//! Application routes are mounted under `/api`; health probes live at the root.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{auth, blogs, comments, health, posts, sa_blogs, testing};
use crate::state::AppState;

/// Create the main router.
///
/// The data-wiping testing route is only mounted when `with_testing` is set.
pub fn create_router(with_testing: bool) -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .nest("/api", api_routes(with_testing))
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes(with_testing: bool) -> Router<AppState> {
    let router = Router::new()
        .merge(auth_routes())
        .merge(sa_blog_routes())
        .merge(blog_routes())
        .merge(post_routes())
        .merge(comment_routes());

    if with_testing {
        router.route("/testing/all-data", delete(testing::clear_all_data))
    } else {
        router
    }
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/registration", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh-token", post(auth::refresh_token))
        .route("/auth/me", get(auth::me))
}

/// Super-admin routes (Basic auth)
fn sa_blog_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/sa/blogs",
            get(sa_blogs::list_blogs).post(sa_blogs::create_blog),
        )
        .route(
            "/sa/blogs/:id",
            get(sa_blogs::get_blog)
                .put(sa_blogs::update_blog)
                .delete(sa_blogs::delete_blog),
        )
        .route(
            "/sa/blogs/:id/posts",
            get(sa_blogs::list_blog_posts).post(sa_blogs::create_post),
        )
        .route(
            "/sa/blogs/:id/posts/:post_id",
            put(sa_blogs::update_post).delete(sa_blogs::delete_post),
        )
}

/// Public blog routes
fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(blogs::list_blogs))
        .route("/blogs/:id", get(blogs::get_blog))
        .route("/blogs/:id/posts", get(blogs::list_blog_posts))
}

/// Post routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::list_posts))
        .route("/posts/:id", get(posts::get_post))
        .route("/posts/:id/like-status", put(posts::set_like_status))
        .route(
            "/posts/:id/comments",
            get(posts::list_comments).post(posts::create_comment),
        )
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/comments/:id",
            get(comments::get_comment)
                .put(comments::update_comment)
                .delete(comments::delete_comment),
        )
        .route("/comments/:id/like-status", put(comments::set_like_status))
}
