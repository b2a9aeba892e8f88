//! Reaction models -> entities

use blog_core::entities::{Reaction, ReactionSummary, RecentLike};
use blog_core::error::DomainError;
use blog_core::value_objects::{LikeStatus, ReactionStatus};

use crate::models::{ReactionModel, ReactionSummaryModel, RecentLikeModel};

fn parse_status(raw: &str) -> Result<ReactionStatus, DomainError> {
    raw.parse()
        .map_err(|_| DomainError::DatabaseError(format!("unexpected reaction status {raw:?}")))
}

impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        Ok(Reaction {
            actor_id: model.user_id,
            target_id: model.target_id,
            status: parse_status(&model.status)?,
            reacted_at: model.added_at,
        })
    }
}

impl From<RecentLikeModel> for RecentLike {
    fn from(model: RecentLikeModel) -> Self {
        RecentLike {
            actor_id: model.user_id,
            actor_login: model.login,
            reacted_at: model.added_at,
        }
    }
}

impl TryFrom<ReactionSummaryModel> for ReactionSummary {
    type Error = DomainError;

    fn try_from(model: ReactionSummaryModel) -> Result<Self, Self::Error> {
        let viewer_status = match model.my_status.as_deref() {
            Some(raw) => LikeStatus::from(parse_status(raw)?),
            None => LikeStatus::None,
        };

        Ok(ReactionSummary {
            like_count: model.likes_count,
            dislike_count: model.dislikes_count,
            viewer_status,
            recent_likes: model.newest_likes.0.into_iter().map(RecentLike::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sqlx::types::Json;
    use uuid::Uuid;

    #[test]
    fn test_reaction_from_model() {
        let model = ReactionModel {
            user_id: Uuid::new_v4(),
            target_id: Uuid::new_v4(),
            status: "Dislike".to_string(),
            added_at: Utc::now(),
        };
        let reaction = Reaction::try_from(model.clone()).unwrap();
        assert_eq!(reaction.actor_id, model.user_id);
        assert_eq!(reaction.status, ReactionStatus::Dislike);
    }

    #[test]
    fn test_reaction_with_unknown_status_is_rejected() {
        let model = ReactionModel {
            user_id: Uuid::new_v4(),
            target_id: Uuid::new_v4(),
            status: "None".to_string(),
            added_at: Utc::now(),
        };
        assert!(matches!(
            Reaction::try_from(model),
            Err(DomainError::DatabaseError(_))
        ));
    }

    #[test]
    fn test_summary_from_model() {
        let liker = Uuid::new_v4();
        let model = ReactionSummaryModel {
            target_id: Uuid::new_v4(),
            likes_count: 2,
            dislikes_count: 1,
            my_status: Some("Like".to_string()),
            newest_likes: Json(vec![RecentLikeModel {
                user_id: liker,
                login: "alice".to_string(),
                added_at: Utc::now(),
            }]),
        };
        let summary = ReactionSummary::try_from(model).unwrap();
        assert_eq!(summary.like_count, 2);
        assert_eq!(summary.dislike_count, 1);
        assert_eq!(summary.viewer_status, LikeStatus::Like);
        assert_eq!(summary.recent_likes[0].actor_id, liker);
        assert_eq!(summary.recent_likes[0].actor_login, "alice");
    }

    #[test]
    fn test_summary_without_viewer_row() {
        let model = ReactionSummaryModel {
            target_id: Uuid::new_v4(),
            likes_count: 0,
            dislikes_count: 0,
            my_status: None,
            newest_likes: Json(vec![]),
        };
        assert_eq!(
            ReactionSummary::try_from(model).unwrap(),
            ReactionSummary::empty()
        );
    }
}
