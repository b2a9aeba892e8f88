//! In-memory [`ReactionStore`] for unit tests

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use blog_core::{
    DomainError, LikeStatus, Reaction, ReactionStatus, ReactionStore, ReactionSummary, RecentLike,
    RepoResult, TargetKind, RECENT_LIKES_LIMIT,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

type Key = (TargetKind, Uuid, Uuid);

#[derive(Default)]
struct State {
    targets: HashSet<(TargetKind, Uuid)>,
    deleted: HashSet<Uuid>,
    logins: HashMap<Uuid, String>,
    rows: HashMap<Key, Reaction>,
    /// Rows `find_one` cannot see, simulating a concurrent writer
    hidden: HashSet<Key>,
    ticks: i64,
    batch_calls: usize,
    last_batch_len: usize,
}

impl State {
    /// Strictly increasing timestamps so recency ordering never ties
    fn now(&mut self) -> DateTime<Utc> {
        self.ticks += 1;
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(self.ticks)
    }

    fn is_live(&self, kind: TargetKind, id: Uuid) -> bool {
        self.targets.contains(&(kind, id)) && !self.deleted.contains(&id)
    }
}

#[derive(Default)]
pub(crate) struct MemoryReactionStore {
    state: Mutex<State>,
}

impl MemoryReactionStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_target(&self, kind: TargetKind) -> Uuid {
        let id = Uuid::new_v4();
        self.add_target_with_id(kind, id);
        id
    }

    pub(crate) fn add_target_with_id(&self, kind: TargetKind, id: Uuid) {
        self.state.lock().unwrap().targets.insert((kind, id));
    }

    pub(crate) fn soft_delete(&self, id: Uuid) {
        self.state.lock().unwrap().deleted.insert(id);
    }

    pub(crate) fn add_user(&self, login: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.state.lock().unwrap().logins.insert(id, login.to_string());
        id
    }

    /// Store a row that the next `find_one` will not report
    pub(crate) fn insert_hidden(&self, kind: TargetKind, actor: Uuid, target: Uuid, status: LikeStatus) {
        let mut state = self.state.lock().unwrap();
        let reacted_at = state.now();
        let status = status.to_reaction().unwrap();
        state.rows.insert(
            (kind, actor, target),
            Reaction {
                actor_id: actor,
                target_id: target,
                status,
                reacted_at,
            },
        );
        state.hidden.insert((kind, actor, target));
    }

    pub(crate) fn batch_calls(&self) -> usize {
        self.state.lock().unwrap().batch_calls
    }

    pub(crate) fn last_batch_len(&self) -> usize {
        self.state.lock().unwrap().last_batch_len
    }

    pub(crate) fn row_count(&self, kind: TargetKind, target: Uuid) -> usize {
        let state = self.state.lock().unwrap();
        state
            .rows
            .keys()
            .filter(|(k, _, t)| *k == kind && *t == target)
            .count()
    }
}

#[async_trait]
impl ReactionStore for MemoryReactionStore {
    async fn find_one(
        &self,
        kind: TargetKind,
        actor_id: Uuid,
        target_id: Uuid,
    ) -> RepoResult<Option<Reaction>> {
        let mut state = self.state.lock().unwrap();
        let key = (kind, actor_id, target_id);
        if state.hidden.remove(&key) {
            return Ok(None);
        }
        Ok(state.rows.get(&key).cloned())
    }

    async fn create(
        &self,
        kind: TargetKind,
        actor_id: Uuid,
        target_id: Uuid,
        status: ReactionStatus,
    ) -> RepoResult<Reaction> {
        let mut state = self.state.lock().unwrap();
        let key = (kind, actor_id, target_id);
        if state.rows.contains_key(&key) {
            return Err(DomainError::ReactionAlreadyExists { kind, target_id });
        }
        if !state.targets.contains(&(kind, target_id)) {
            return Err(DomainError::target_not_found(kind, target_id));
        }
        let reaction = Reaction {
            actor_id,
            target_id,
            status,
            reacted_at: state.now(),
        };
        state.rows.insert(key, reaction.clone());
        Ok(reaction)
    }

    async fn update_status(
        &self,
        kind: TargetKind,
        actor_id: Uuid,
        target_id: Uuid,
        status: ReactionStatus,
    ) -> RepoResult<Option<Reaction>> {
        let mut state = self.state.lock().unwrap();
        let now = state.now();
        Ok(state.rows.get_mut(&(kind, actor_id, target_id)).map(|row| {
            row.status = status;
            row.reacted_at = now;
            row.clone()
        }))
    }

    async fn delete(&self, kind: TargetKind, actor_id: Uuid, target_id: Uuid) -> RepoResult<bool> {
        let mut state = self.state.lock().unwrap();
        Ok(state.rows.remove(&(kind, actor_id, target_id)).is_some())
    }

    async fn batch_summarize(
        &self,
        kind: TargetKind,
        target_ids: &[Uuid],
        viewer_id: Option<Uuid>,
    ) -> RepoResult<HashMap<Uuid, ReactionSummary>> {
        let mut state = self.state.lock().unwrap();
        state.batch_calls += 1;
        state.last_batch_len = target_ids.len();

        let mut summaries = HashMap::new();
        for &target_id in target_ids {
            if !state.is_live(kind, target_id) {
                continue;
            }
            let rows: Vec<&Reaction> = state
                .rows
                .iter()
                .filter(|((k, _, t), _)| *k == kind && *t == target_id)
                .map(|(_, r)| r)
                .collect();

            let count = |s: ReactionStatus| rows.iter().filter(|r| r.status == s).count() as i64;
            let viewer_status = viewer_id
                .and_then(|v| rows.iter().find(|r| r.actor_id == v))
                .map(|r| r.status)
                .into();

            let mut recent_likes = Vec::new();
            if kind.tracks_recent_likes() {
                let mut likes: Vec<&&Reaction> =
                    rows.iter().filter(|r| r.status == ReactionStatus::Like).collect();
                likes.sort_by(|a, b| b.reacted_at.cmp(&a.reacted_at).then(a.actor_id.cmp(&b.actor_id)));
                recent_likes = likes
                    .into_iter()
                    .take(RECENT_LIKES_LIMIT)
                    .map(|r| RecentLike {
                        actor_id: r.actor_id,
                        actor_login: state.logins.get(&r.actor_id).cloned().unwrap_or_default(),
                        reacted_at: r.reacted_at,
                    })
                    .collect();
            }

            summaries.insert(
                target_id,
                ReactionSummary {
                    like_count: count(ReactionStatus::Like),
                    dislike_count: count(ReactionStatus::Dislike),
                    viewer_status,
                    recent_likes,
                },
            );
        }
        Ok(summaries)
    }
}
