//! Value objects - immutable types that represent domain concepts

mod content_state;
mod like_status;
mod paging;

pub use content_state::ContentState;
pub use like_status::{LikeStatus, LikeStatusParseError, ReactionStatus};
pub use paging::{PageRequest, SortDirection, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
