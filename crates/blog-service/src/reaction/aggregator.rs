use std::collections::HashMap;

use blog_core::{DomainError, LikeStatus, ReactionStore, ReactionSummary, TargetKind, RECENT_LIKES_LIMIT};
use tracing::{instrument, warn};
use uuid::Uuid;

use crate::services::error::{ServiceError, ServiceResult};

/// Batched reaction summaries over a [`ReactionStore`].
///
/// Single-target reads go through the batch path so both can never disagree.
#[derive(Clone, Copy)]
pub struct ReactionAggregator<'a> {
    store: &'a dyn ReactionStore,
}

impl<'a> ReactionAggregator<'a> {
    pub fn new(store: &'a dyn ReactionStore) -> Self {
        Self { store }
    }

    /// Summaries for a set of targets in one store read.
    ///
    /// Empty input returns an empty map without touching the store. Ids of
    /// missing or soft-deleted targets are absent from the result.
    #[instrument(skip(self, target_ids), fields(targets = target_ids.len()))]
    pub async fn summarize_many(
        &self,
        kind: TargetKind,
        target_ids: &[Uuid],
        viewer_id: Option<Uuid>,
    ) -> ServiceResult<HashMap<Uuid, ReactionSummary>> {
        if target_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut ids = target_ids.to_vec();
        ids.sort_unstable();
        ids.dedup();

        let mut summaries = self.store.batch_summarize(kind, &ids, viewer_id).await?;
        for summary in summaries.values_mut() {
            normalize(kind, viewer_id.is_some(), summary);
        }

        Ok(summaries)
    }

    /// Summary for one target, or not-found when it does not exist
    pub async fn summarize_one(
        &self,
        kind: TargetKind,
        target_id: Uuid,
        viewer_id: Option<Uuid>,
    ) -> ServiceResult<ReactionSummary> {
        let mut summaries = self.summarize_many(kind, &[target_id], viewer_id).await?;
        summaries
            .remove(&target_id)
            .ok_or_else(|| DomainError::target_not_found(kind, target_id).into())
    }

    /// Take the summary of a target whose existence the caller already checked.
    ///
    /// A missing entry means the target vanished between the two reads and is
    /// reported as an internal error instead of a silent zero summary.
    pub fn require(
        summaries: &mut HashMap<Uuid, ReactionSummary>,
        kind: TargetKind,
        target_id: Uuid,
    ) -> ServiceResult<ReactionSummary> {
        summaries.remove(&target_id).ok_or_else(|| {
            warn!(%kind, %target_id, "Reaction summary missing for a validated target");
            ServiceError::internal(format!("missing reaction summary for {kind} {target_id}"))
        })
    }
}

fn normalize(kind: TargetKind, has_viewer: bool, summary: &mut ReactionSummary) {
    if !has_viewer {
        summary.viewer_status = LikeStatus::None;
    }

    if kind.tracks_recent_likes() {
        summary
            .recent_likes
            .sort_by(|a, b| b.reacted_at.cmp(&a.reacted_at).then(a.actor_id.cmp(&b.actor_id)));
        summary.recent_likes.truncate(RECENT_LIKES_LIMIT);
    } else {
        summary.recent_likes.clear();
    }
}
