//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, list queries and path IDs.

mod auth;
mod listing;
mod path;
mod validated;

pub use auth::{AdminAuth, AuthUser, OptionalAuthUser};
pub use listing::ListParams;
pub use path::{IdPairPath, IdPath};
pub use validated::ValidatedJson;
