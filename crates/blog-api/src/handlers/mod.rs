//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod auth;
pub mod blogs;
pub mod comments;
pub mod health;
pub mod posts;
pub mod sa_blogs;
pub mod testing;
