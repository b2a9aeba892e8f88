//! Repository traits (ports)

mod queries;
mod repositories;

pub use queries::{
    BlogQuery, BlogSortField, CommentQuery, CommentSortField, PostQuery, PostSortField,
};
pub use repositories::{
    BlogRepository, CommentRepository, DataResetRepository, PostRepository, ReactionStore,
    RepoResult, UserRepository,
};
