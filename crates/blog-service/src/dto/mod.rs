//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    BlogInputRequest, CommentInputRequest, LikeStatusRequest, LoginRequest, PostInputRequest,
    RefreshTokenRequest, RegisterRequest,
};

pub use responses::{
    AuthTokensResponse, BlogResponse, CommentResponse, CommentatorInfo, ExtendedLikesInfo,
    HealthChecks, HealthResponse, LikesInfo, MeResponse, NewestLike, Paginated, PostResponse,
    ReadinessResponse,
};
