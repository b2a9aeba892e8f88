//! Integration test utilities for the blog platform
//!
//! Spawns the REST API in-process against a real PostgreSQL database.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
