//! Blog service
//!
//! Super-admin management of blogs and the public blog listing.

use blog_core::{Blog, BlogQuery};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{BlogInputRequest, BlogResponse, Paginated};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Blog service
pub struct BlogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BlogService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get an active blog or fail with not-found
    pub(crate) async fn require_blog(&self, blog_id: Uuid) -> ServiceResult<Blog> {
        self.ctx
            .blog_repo()
            .find_by_id(blog_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Blog", blog_id))
    }

    /// Create a blog
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_blog(&self, request: BlogInputRequest) -> ServiceResult<BlogResponse> {
        let blog = Blog::new(
            request.name.trim().to_string(),
            request.description.trim().to_string(),
            request.website_url,
        );

        self.ctx.blog_repo().create(&blog).await?;

        info!(blog_id = %blog.id, "Blog created");

        Ok(BlogResponse::from(blog))
    }

    /// Replace the editable fields of a blog
    #[instrument(skip(self, request))]
    pub async fn update_blog(&self, blog_id: Uuid, request: BlogInputRequest) -> ServiceResult<()> {
        let mut blog = self.require_blog(blog_id).await?;

        blog.update(
            request.name.trim().to_string(),
            request.description.trim().to_string(),
            request.website_url,
        );
        self.ctx.blog_repo().update(&blog).await?;

        info!(blog_id = %blog_id, "Blog updated");

        Ok(())
    }

    /// Soft delete a blog
    #[instrument(skip(self))]
    pub async fn delete_blog(&self, blog_id: Uuid) -> ServiceResult<()> {
        self.ctx.blog_repo().delete(blog_id).await?;

        info!(blog_id = %blog_id, "Blog deleted");

        Ok(())
    }

    /// Get a blog by ID
    #[instrument(skip(self))]
    pub async fn get_blog(&self, blog_id: Uuid) -> ServiceResult<BlogResponse> {
        let blog = self.require_blog(blog_id).await?;
        Ok(BlogResponse::from(blog))
    }

    /// One page of blogs with the total count
    #[instrument(skip(self))]
    pub async fn list_blogs(&self, query: BlogQuery) -> ServiceResult<Paginated<BlogResponse>> {
        let repo = self.ctx.blog_repo();
        let (blogs, total) = tokio::try_join!(repo.find_page(&query), repo.count(&query))?;

        let items = blogs.into_iter().map(BlogResponse::from).collect();
        Ok(Paginated::new(items, &query.page, total))
    }
}
