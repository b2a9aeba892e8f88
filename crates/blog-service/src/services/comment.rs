//! Comment service
//!
//! Comments on posts. Only the author may edit or delete a comment.

use blog_core::{Comment, CommentQuery, DomainError, LikeStatus, ReactionSummary, TargetKind};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{CommentInputRequest, CommentResponse, Paginated};
use crate::reaction::{ReactionAggregator, ReactionOutcome};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::post::PostService;

const KIND: TargetKind = TargetKind::Comment;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn require_comment(&self, comment_id: Uuid) -> ServiceResult<Comment> {
        self.ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id))
    }

    /// Get a comment the user wrote; other authors are refused
    async fn require_own_comment(&self, comment_id: Uuid, user_id: Uuid) -> ServiceResult<Comment> {
        let comment = self.require_comment(comment_id).await?;
        if !comment.is_authored_by(user_id) {
            warn!(comment_id = %comment_id, user_id = %user_id, "Comment change by non-author refused");
            return Err(DomainError::NotCommentAuthor.into());
        }
        Ok(comment)
    }

    /// Comment on a post
    #[instrument(skip(self, request))]
    pub async fn create_comment(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        request: CommentInputRequest,
    ) -> ServiceResult<CommentResponse> {
        let post = PostService::new(self.ctx).require_post(post_id).await?;
        let author = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::unauthorized("user no longer exists"))?;

        let comment = Comment::new(post.id, &author, request.content);
        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, post_id = %post_id, user_id = %user_id, "Comment created");

        Ok(CommentResponse::new(comment, ReactionSummary::empty()))
    }

    /// Edit own comment
    #[instrument(skip(self, request))]
    pub async fn update_comment(
        &self,
        comment_id: Uuid,
        user_id: Uuid,
        request: CommentInputRequest,
    ) -> ServiceResult<()> {
        let mut comment = self.require_own_comment(comment_id, user_id).await?;

        comment.edit(request.content);
        self.ctx.comment_repo().update(&comment).await?;

        info!(comment_id = %comment_id, "Comment updated");

        Ok(())
    }

    /// Soft delete own comment
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, comment_id: Uuid, user_id: Uuid) -> ServiceResult<()> {
        self.require_own_comment(comment_id, user_id).await?;
        self.ctx.comment_repo().delete(comment_id).await?;

        info!(comment_id = %comment_id, "Comment deleted");

        Ok(())
    }

    /// Get a comment with the viewer's reaction summary
    #[instrument(skip(self))]
    pub async fn get_comment(
        &self,
        comment_id: Uuid,
        viewer_id: Option<Uuid>,
    ) -> ServiceResult<CommentResponse> {
        let comment = self.require_comment(comment_id).await?;
        let summary = self
            .ctx
            .reaction_aggregator()
            .summarize_one(KIND, comment.id, viewer_id)
            .await?;

        Ok(CommentResponse::new(comment, summary))
    }

    /// One page of the comments of a post
    #[instrument(skip(self))]
    pub async fn list_post_comments(
        &self,
        query: CommentQuery,
        viewer_id: Option<Uuid>,
    ) -> ServiceResult<Paginated<CommentResponse>> {
        PostService::new(self.ctx).require_post(query.post_id).await?;

        let repo = self.ctx.comment_repo();
        let (comments, total) = tokio::try_join!(repo.find_page(&query), repo.count(&query))?;

        let ids: Vec<Uuid> = comments.iter().map(|c| c.id).collect();
        let mut summaries = self
            .ctx
            .reaction_aggregator()
            .summarize_many(KIND, &ids, viewer_id)
            .await?;

        let items = comments
            .into_iter()
            .map(|comment| {
                let summary = ReactionAggregator::require(&mut summaries, KIND, comment.id)?;
                Ok(CommentResponse::new(comment, summary))
            })
            .collect::<ServiceResult<Vec<_>>>()?;

        Ok(Paginated::new(items, &query.page, total))
    }

    /// Set the user's like status on a comment
    #[instrument(skip(self))]
    pub async fn set_like_status(
        &self,
        comment_id: Uuid,
        user_id: Uuid,
        status: LikeStatus,
    ) -> ServiceResult<ReactionOutcome> {
        self.require_comment(comment_id).await?;

        self.ctx
            .reaction_commands()
            .apply_settled(KIND, user_id, comment_id, status)
            .await
    }
}
