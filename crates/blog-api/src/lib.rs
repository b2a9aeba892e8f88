//! # blog-api
//!
//! REST API server for the blog platform built with Axum.
//!
//! Public reads under `/api/blogs`, `/api/posts` and `/api/comments`,
//! admin management under `/api/sa` (Basic auth) and user auth under `/api/auth`.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{build_service_context, create_app, create_app_state, run, run_server};
pub use state::AppState;
