//! # blog-service
//!
//! Application layer: use cases, the reaction read-model and DTOs.

pub mod dto;
pub mod reaction;
pub mod services;

pub use reaction::{ReactionAggregator, ReactionCommandProcessor, ReactionOutcome};
pub use services::{
    AuthService, BlogService, CommentService, PostService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, TestingService,
};
