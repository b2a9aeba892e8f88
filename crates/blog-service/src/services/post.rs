//! Post service
//!
//! Blog-scoped post management for the super admin, public post reads
//! personalized for the viewer, and post like status changes.

use blog_core::{LikeStatus, Post, PostQuery, ReactionSummary, TargetKind};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{Paginated, PostInputRequest, PostResponse};
use crate::reaction::{ReactionAggregator, ReactionOutcome};

use super::blog::BlogService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const KIND: TargetKind = TargetKind::Post;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get an active post or fail with not-found
    pub(crate) async fn require_post(&self, post_id: Uuid) -> ServiceResult<Post> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id))
    }

    /// Get a post that must belong to the given blog
    async fn require_post_in_blog(&self, blog_id: Uuid, post_id: Uuid) -> ServiceResult<Post> {
        let post = self.require_post(post_id).await?;
        if !post.belongs_to(blog_id) {
            return Err(ServiceError::not_found("Post", post_id));
        }
        Ok(post)
    }

    // === Admin ===

    /// Create a post inside a blog
    #[instrument(skip(self, request))]
    pub async fn create_post(
        &self,
        blog_id: Uuid,
        request: PostInputRequest,
    ) -> ServiceResult<PostResponse> {
        let blog = BlogService::new(self.ctx).require_blog(blog_id).await?;

        let post = Post::new(
            &blog,
            request.title.trim().to_string(),
            request.short_description.trim().to_string(),
            request.content.trim().to_string(),
        );
        self.ctx.post_repo().create(&post).await?;

        info!(post_id = %post.id, blog_id = %blog_id, "Post created");

        Ok(PostResponse::new(post, ReactionSummary::empty()))
    }

    /// Replace the editable fields of a post
    #[instrument(skip(self, request))]
    pub async fn update_post(
        &self,
        blog_id: Uuid,
        post_id: Uuid,
        request: PostInputRequest,
    ) -> ServiceResult<()> {
        let mut post = self.require_post_in_blog(blog_id, post_id).await?;

        post.update(
            request.title.trim().to_string(),
            request.short_description.trim().to_string(),
            request.content.trim().to_string(),
        );
        self.ctx.post_repo().update(&post).await?;

        info!(post_id = %post_id, "Post updated");

        Ok(())
    }

    /// Soft delete a post of a blog
    #[instrument(skip(self))]
    pub async fn delete_post(&self, blog_id: Uuid, post_id: Uuid) -> ServiceResult<()> {
        self.require_post_in_blog(blog_id, post_id).await?;
        self.ctx.post_repo().delete(post_id).await?;

        info!(post_id = %post_id, "Post deleted");

        Ok(())
    }

    // === Reads ===

    /// Get a post with the viewer's reaction summary
    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: Uuid, viewer_id: Option<Uuid>) -> ServiceResult<PostResponse> {
        let post = self.require_post(post_id).await?;
        let summary = self
            .ctx
            .reaction_aggregator()
            .summarize_one(KIND, post.id, viewer_id)
            .await?;

        Ok(PostResponse::new(post, summary))
    }

    /// One page of posts, each with its reaction summary
    #[instrument(skip(self))]
    pub async fn list_posts(
        &self,
        query: PostQuery,
        viewer_id: Option<Uuid>,
    ) -> ServiceResult<Paginated<PostResponse>> {
        let repo = self.ctx.post_repo();
        let (posts, total) = tokio::try_join!(repo.find_page(&query), repo.count(&query))?;

        let ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();
        let mut summaries = self
            .ctx
            .reaction_aggregator()
            .summarize_many(KIND, &ids, viewer_id)
            .await?;

        let items = posts
            .into_iter()
            .map(|post| {
                let summary = ReactionAggregator::require(&mut summaries, KIND, post.id)?;
                Ok(PostResponse::new(post, summary))
            })
            .collect::<ServiceResult<Vec<_>>>()?;

        Ok(Paginated::new(items, &query.page, total))
    }

    /// One page of the posts of a blog
    #[instrument(skip(self, query))]
    pub async fn list_blog_posts(
        &self,
        blog_id: Uuid,
        mut query: PostQuery,
        viewer_id: Option<Uuid>,
    ) -> ServiceResult<Paginated<PostResponse>> {
        BlogService::new(self.ctx).require_blog(blog_id).await?;

        query.blog_id = Some(blog_id);
        self.list_posts(query, viewer_id).await
    }

    // === Reactions ===

    /// Set the user's like status on a post
    #[instrument(skip(self))]
    pub async fn set_like_status(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        status: LikeStatus,
    ) -> ServiceResult<ReactionOutcome> {
        self.require_post(post_id).await?;

        self.ctx
            .reaction_commands()
            .apply_settled(KIND, user_id, post_id, status)
            .await
    }
}
