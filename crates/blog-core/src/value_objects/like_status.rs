//! Like statuses
//!
//! `ReactionStatus` is what gets stored. `LikeStatus` is what a viewer submits and sees,
//! and adds `None` for "no reaction".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stored status of a reaction row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionStatus {
    Like,
    Dislike,
}

impl ReactionStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "Like",
            Self::Dislike => "Dislike",
        }
    }
}

impl fmt::Display for ReactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionStatus {
    type Err = LikeStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Like" => Ok(Self::Like),
            "Dislike" => Ok(Self::Dislike),
            other => Err(LikeStatusParseError(other.to_string())),
        }
    }
}

/// Status as submitted by or reported to a viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LikeStatus {
    #[default]
    None,
    Like,
    Dislike,
}

impl LikeStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Like => "Like",
            Self::Dislike => "Dislike",
        }
    }

    /// The status to store, or `None` when the row should not exist
    pub const fn to_reaction(self) -> Option<ReactionStatus> {
        match self {
            Self::None => None,
            Self::Like => Some(ReactionStatus::Like),
            Self::Dislike => Some(ReactionStatus::Dislike),
        }
    }
}

impl From<ReactionStatus> for LikeStatus {
    fn from(status: ReactionStatus) -> Self {
        match status {
            ReactionStatus::Like => Self::Like,
            ReactionStatus::Dislike => Self::Dislike,
        }
    }
}

impl From<Option<ReactionStatus>> for LikeStatus {
    fn from(status: Option<ReactionStatus>) -> Self {
        status.map_or(Self::None, Self::from)
    }
}

impl fmt::Display for LikeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LikeStatus {
    type Err = LikeStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(Self::None),
            other => other.parse::<ReactionStatus>().map(Self::from),
        }
    }
}

/// Unknown status string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid like status: {0}")]
pub struct LikeStatusParseError(pub String);
