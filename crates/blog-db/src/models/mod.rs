//! Database models - SQLx-compatible structs for PostgreSQL rows

mod blog;
mod comment;
mod post;
mod reaction;
mod user;

pub use blog::BlogModel;
pub use comment::CommentModel;
pub use post::PostModel;
pub use reaction::{ReactionModel, ReactionSummaryModel, RecentLikeModel};
pub use user::UserModel;
