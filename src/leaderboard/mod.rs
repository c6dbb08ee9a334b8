//! Persisted top-5 fastest completions.
//!
//! The leaderboard file is a pretty-printed JSON array of
//! `{"player": <name>, "time": <seconds>}` records, ascending by time. It is
//! read in full and rewritten in full on every update.

mod store;

pub use store::LeaderboardStore;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Number of entries kept.
pub const MAX_ENTRIES: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player: String,
    /// Completion time in whole seconds.
    pub time: u64,
}

impl LeaderboardEntry {
    pub fn new(player: impl Into<String>, time: u64) -> Self {
        Self {
            player: player.into(),
            time,
        }
    }
}

#[derive(Debug, Error)]
pub enum LeaderboardError {
    /// The file exists but could not be read.
    #[error("unable to read leaderboard {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file was read but is not a valid leaderboard.
    #[error("leaderboard {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Writing the updated leaderboard failed.
    #[error("unable to write leaderboard {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl LeaderboardError {
    /// Whether this is a bad store (unreadable or malformed) rather than a
    /// failed write.
    #[must_use]
    pub fn is_corrupt_store(&self) -> bool {
        matches!(
            self,
            LeaderboardError::Unreadable { .. } | LeaderboardError::Corrupt { .. }
        )
    }
}

/// Insert `entry`, keeping the fastest [`MAX_ENTRIES`] in ascending order.
///
/// Sorting is stable, so an earlier entry stays ahead of a later tie.
pub fn rank(entries: &mut Vec<LeaderboardEntry>, entry: LeaderboardEntry) {
    entries.push(entry);
    entries.sort_by_key(|e| e.time);
    entries.truncate(MAX_ENTRIES);
}
