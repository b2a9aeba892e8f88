use blog_core::{DomainError, LikeStatus, ReactionStore, TargetKind};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::services::error::{ServiceError, ServiceResult};

/// Store mutation performed by [`ReactionCommandProcessor::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionOutcome {
    Created,
    Updated,
    /// Desired status was already in place
    Unchanged,
    Removed,
    /// `None` was requested and no row existed
    AlreadyAbsent,
}

/// Translates a desired like status into the minimal store mutation
#[derive(Clone, Copy)]
pub struct ReactionCommandProcessor<'a> {
    store: &'a dyn ReactionStore,
}

impl<'a> ReactionCommandProcessor<'a> {
    pub fn new(store: &'a dyn ReactionStore) -> Self {
        Self { store }
    }

    /// Apply `desired` for the actor on the target.
    ///
    /// Store failures, including a lost create race, are returned unchanged.
    #[instrument(skip(self))]
    pub async fn apply(
        &self,
        kind: TargetKind,
        actor_id: Uuid,
        target_id: Uuid,
        desired: LikeStatus,
    ) -> ServiceResult<ReactionOutcome> {
        let Some(status) = desired.to_reaction() else {
            let removed = self.store.delete(kind, actor_id, target_id).await?;
            if removed {
                info!(%kind, %actor_id, %target_id, "Reaction removed");
                return Ok(ReactionOutcome::Removed);
            }
            return Ok(ReactionOutcome::AlreadyAbsent);
        };

        match self.store.find_one(kind, actor_id, target_id).await? {
            None => {
                self.store.create(kind, actor_id, target_id, status).await?;
                info!(%kind, %actor_id, %target_id, %status, "Reaction created");
                Ok(ReactionOutcome::Created)
            }
            Some(existing) if existing.status == status => Ok(ReactionOutcome::Unchanged),
            Some(_) => {
                let updated = self
                    .store
                    .update_status(kind, actor_id, target_id, status)
                    .await?;
                if updated.is_none() {
                    // Row removed concurrently between the read and the write
                    debug!(%kind, %actor_id, %target_id, "Reaction vanished before update");
                    return Err(ServiceError::conflict("reaction changed concurrently"));
                }
                info!(%kind, %actor_id, %target_id, %status, "Reaction updated");
                Ok(ReactionOutcome::Updated)
            }
        }
    }

    /// [`apply`](Self::apply), treating a lost duplicate-create race as success
    /// when the winning write left the desired status in place.
    pub async fn apply_settled(
        &self,
        kind: TargetKind,
        actor_id: Uuid,
        target_id: Uuid,
        desired: LikeStatus,
    ) -> ServiceResult<ReactionOutcome> {
        match self.apply(kind, actor_id, target_id, desired).await {
            Err(ServiceError::Domain(DomainError::ReactionAlreadyExists { .. })) => {
                let current = self.current_status(kind, actor_id, target_id).await?;
                if current == desired {
                    info!(%kind, %actor_id, %target_id, "Concurrent reaction already applied");
                    Ok(ReactionOutcome::Unchanged)
                } else {
                    Err(ServiceError::conflict(format!(
                        "concurrent reaction left {current} on {kind} {target_id}"
                    )))
                }
            }
            other => other,
        }
    }

    /// The actor's stored status for a target, `None` when no row exists
    pub async fn current_status(
        &self,
        kind: TargetKind,
        actor_id: Uuid,
        target_id: Uuid,
    ) -> ServiceResult<LikeStatus> {
        let reaction = self.store.find_one(kind, actor_id, target_id).await?;
        Ok(reaction.map(|r| r.status).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reaction::memory::MemoryReactionStore;
    use crate::reaction::ReactionAggregator;

    const POST: TargetKind = TargetKind::Post;

    #[tokio::test]
    async fn test_like_then_flip_then_clear() {
        let store = MemoryReactionStore::new();
        let post = store.add_target(POST);
        let (a, b) = (store.add_user("alice"), store.add_user("bob"));
        let commands = ReactionCommandProcessor::new(&store);
        let aggregator = ReactionAggregator::new(&store);

        assert_eq!(
            commands.apply(POST, a, post, LikeStatus::Like).await.unwrap(),
            ReactionOutcome::Created
        );
        let s = aggregator.summarize_one(POST, post, Some(a)).await.unwrap();
        assert_eq!((s.like_count, s.dislike_count, s.viewer_status), (1, 0, LikeStatus::Like));

        commands.apply(POST, b, post, LikeStatus::Dislike).await.unwrap();
        let s = aggregator.summarize_one(POST, post, Some(a)).await.unwrap();
        assert_eq!((s.like_count, s.dislike_count), (1, 1));

        assert_eq!(
            commands.apply(POST, a, post, LikeStatus::Dislike).await.unwrap(),
            ReactionOutcome::Updated
        );
        let s = aggregator.summarize_one(POST, post, Some(a)).await.unwrap();
        assert_eq!((s.like_count, s.dislike_count, s.viewer_status), (0, 2, LikeStatus::Dislike));

        assert_eq!(
            commands.apply(POST, a, post, LikeStatus::None).await.unwrap(),
            ReactionOutcome::Removed
        );
        let s = aggregator.summarize_one(POST, post, Some(a)).await.unwrap();
        assert_eq!((s.like_count, s.dislike_count, s.viewer_status), (0, 1, LikeStatus::None));
    }

    #[tokio::test]
    async fn test_clearing_twice_is_idempotent() {
        let store = MemoryReactionStore::new();
        let post = store.add_target(POST);
        let a = store.add_user("alice");
        let commands = ReactionCommandProcessor::new(&store);

        commands.apply(POST, a, post, LikeStatus::Like).await.unwrap();
        for expected in [ReactionOutcome::Removed, ReactionOutcome::AlreadyAbsent] {
            assert_eq!(commands.apply(POST, a, post, LikeStatus::None).await.unwrap(), expected);
            assert!(store.find_one(POST, a, post).await.unwrap().is_none());
        }
    }

    #[tokio::test]
    async fn test_same_status_does_not_bump_recency() {
        let store = MemoryReactionStore::new();
        let post = store.add_target(POST);
        let (a, b) = (store.add_user("alice"), store.add_user("bob"));
        let commands = ReactionCommandProcessor::new(&store);

        commands.apply(POST, a, post, LikeStatus::Like).await.unwrap();
        commands.apply(POST, b, post, LikeStatus::Like).await.unwrap();
        assert_eq!(
            commands.apply(POST, a, post, LikeStatus::Like).await.unwrap(),
            ReactionOutcome::Unchanged
        );

        let s = ReactionAggregator::new(&store).summarize_one(POST, post, None).await.unwrap();
        let order: Vec<_> = s.recent_likes.iter().map(|l| l.actor_id).collect();
        assert_eq!(order, vec![b, a]);
        assert_eq!(store.row_count(POST, post), 2);
    }

    #[tokio::test]
    async fn test_flip_back_to_like_counts_as_fresh() {
        let store = MemoryReactionStore::new();
        let post = store.add_target(POST);
        let (a, b) = (store.add_user("alice"), store.add_user("bob"));
        let commands = ReactionCommandProcessor::new(&store);

        commands.apply(POST, a, post, LikeStatus::Like).await.unwrap();
        commands.apply(POST, b, post, LikeStatus::Like).await.unwrap();
        commands.apply(POST, a, post, LikeStatus::Dislike).await.unwrap();
        commands.apply(POST, a, post, LikeStatus::Like).await.unwrap();

        let s = ReactionAggregator::new(&store).summarize_one(POST, post, None).await.unwrap();
        let order: Vec<_> = s.recent_likes.iter().map(|l| l.actor_id).collect();
        assert_eq!(order, vec![a, b]);
    }

    #[tokio::test]
    async fn test_single_actor_keeps_one_row() {
        let store = MemoryReactionStore::new();
        let post = store.add_target(POST);
        let a = store.add_user("alice");
        let commands = ReactionCommandProcessor::new(&store);

        let sequence = [
            LikeStatus::Like,
            LikeStatus::Like,
            LikeStatus::Dislike,
            LikeStatus::None,
            LikeStatus::Dislike,
            LikeStatus::Like,
        ];
        for status in sequence {
            commands.apply(POST, a, post, status).await.unwrap();
            assert!(store.row_count(POST, post) <= 1);
        }

        let row = store.find_one(POST, a, post).await.unwrap().unwrap();
        assert_eq!(LikeStatus::from(row.status), LikeStatus::Like);
    }

    #[tokio::test]
    async fn test_lost_create_race_surfaces_conflict() {
        let store = MemoryReactionStore::new();
        let post = store.add_target(POST);
        let a = store.add_user("alice");
        store.insert_hidden(POST, a, post, LikeStatus::Like);

        let err = ReactionCommandProcessor::new(&store)
            .apply(POST, a, post, LikeStatus::Like)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Domain(DomainError::ReactionAlreadyExists { .. })
        ));
    }

    #[tokio::test]
    async fn test_settled_accepts_matching_winner() {
        let store = MemoryReactionStore::new();
        let post = store.add_target(POST);
        let a = store.add_user("alice");
        store.insert_hidden(POST, a, post, LikeStatus::Like);

        let outcome = ReactionCommandProcessor::new(&store)
            .apply_settled(POST, a, post, LikeStatus::Like)
            .await
            .unwrap();

        assert_eq!(outcome, ReactionOutcome::Unchanged);
        assert_eq!(store.row_count(POST, post), 1);
    }

    #[tokio::test]
    async fn test_settled_rejects_diverging_winner() {
        let store = MemoryReactionStore::new();
        let post = store.add_target(POST);
        let a = store.add_user("alice");
        store.insert_hidden(POST, a, post, LikeStatus::Dislike);

        let err = ReactionCommandProcessor::new(&store)
            .apply_settled(POST, a, post, LikeStatus::Like)
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 409);
    }

    #[tokio::test]
    async fn test_missing_target_is_not_found() {
        let store = MemoryReactionStore::new();
        let a = store.add_user("alice");

        let err = ReactionCommandProcessor::new(&store)
            .apply(TargetKind::Comment, a, Uuid::new_v4(), LikeStatus::Dislike)
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }
}
