//! Domain entities - core business objects

mod blog;
mod comment;
mod post;
mod reaction;
mod user;

pub use blog::Blog;
pub use comment::Comment;
pub use post::Post;
pub use reaction::{Reaction, ReactionSummary, RecentLike, TargetKind, RECENT_LIKES_LIMIT};
pub use user::User;
