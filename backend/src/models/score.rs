use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest score accepted on the leaderboard.
pub const MIN_SCORE: u16 = 1;
/// Highest score accepted on the leaderboard. Three digits keep the padded key width fixed.
pub const MAX_SCORE: u16 = 999;

/// A validated score submission.
///
/// Only produced by [`crate::validation::validate_submission`] (or by callers that
/// uphold the same ranges); it is never persisted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    /// Unix seconds, never negative
    pub time: i64,
    /// Player initials
    pub name: String,
    /// Score in `MIN_SCORE..=MAX_SCORE`
    pub score: u16,
}

impl ScoreSubmission {
    pub fn new(time: i64, name: impl Into<String>, score: u16) -> Self {
        Self {
            time,
            name: name.into(),
            score,
        }
    }
}

/// A leaderboard entry decoded from its storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: u16,
    /// ISO-8601 UTC timestamp, second precision, no offset
    pub date: String,
    pub name: String,
}

impl ScoreRecord {
    pub fn new(score: u16, date: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            score,
            date: date.into(),
            name: name.into(),
        }
    }
}

/// The sort key persisted for a leaderboard entry.
///
/// Lexicographic order of keys is leaderboard order, so the store's reverse
/// range scan returns the highest scores first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageKey(pub(crate) String);

impl StorageKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
