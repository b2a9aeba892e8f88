//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in blog-core.

mod blog;
mod comment;
mod data_reset;
mod error;
mod post;
mod reaction;
mod sorting;
mod user;

pub use blog::PgBlogRepository;
pub use comment::PgCommentRepository;
pub use data_reset::PgDataResetRepository;
pub use post::PgPostRepository;
pub use reaction::PgReactionStore;
pub use user::PgUserRepository;
