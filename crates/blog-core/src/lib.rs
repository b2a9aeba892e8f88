//! # blog-core
//!
//! Domain layer containing entities, value objects and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Blog, Comment, Post, Reaction, ReactionSummary, RecentLike, TargetKind, User,
    RECENT_LIKES_LIMIT,
};
pub use error::DomainError;
pub use traits::{
    BlogQuery, BlogRepository, BlogSortField, CommentQuery, CommentRepository, CommentSortField,
    DataResetRepository, PostQuery, PostRepository, PostSortField, ReactionStore, RepoResult,
    UserRepository,
};
pub use value_objects::{ContentState, LikeStatus, PageRequest, ReactionStatus, SortDirection};
