//! # blog-db
//!
//! PostgreSQL persistence via SQLx: connection pool, migrations, row models,
//! row-to-entity mappers and the repository implementations for `blog-core` traits.
//!
//! ```rust,ignore
//! use blog_db::{create_pool, run_migrations, PgPostRepository, PoolConfig};
//!
//! let pool = create_pool(&PoolConfig::default()).await?;
//! run_migrations(&pool).await?;
//! let posts = PgPostRepository::new(pool);
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgPool, PoolConfig};
pub use repositories::{
    PgBlogRepository, PgCommentRepository, PgDataResetRepository, PgPostRepository,
    PgReactionStore, PgUserRepository,
};
