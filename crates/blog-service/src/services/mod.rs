//! Business logic services
//!
//! Each service borrows the [`ServiceContext`] and implements one group of use cases.

pub mod auth;
pub mod blog;
pub mod comment;
pub mod context;
pub mod error;
pub mod post;
pub mod testing;

pub use auth::AuthService;
pub use blog::BlogService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use post::PostService;
pub use testing::TestingService;
