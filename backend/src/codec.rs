//! Storage key codec.
//!
//! A leaderboard entry is stored as a single sort key
//! `<score padded to 3 digits>/<ISO-8601 UTC date>/<name>`. Zero padding makes
//! string order agree with numeric order for every score in `1..=999`, and the
//! ISO-8601 date sorts in time order, so a reverse range scan over the keys of
//! one partition yields the leaderboard without any secondary index.
//!
//! Both functions are pure. [`encode`] trusts its caller to have validated the
//! inputs; [`decode`] treats anything it cannot split back apart as corruption.

use crate::error::MalformedKey;
use crate::models::{ScoreRecord, StorageKey};

/// Separator between the key's fields. Dates and names must not contain it.
pub const KEY_SEPARATOR: char = '/';

/// Width of the zero-padded score prefix.
pub const SCORE_WIDTH: usize = 3;

/// Build the sort key for an entry.
///
/// `score` must be in `1..=999` and `date` and `name` must not contain
/// [`KEY_SEPARATOR`]; neither is checked here.
pub fn encode(score: u16, date: &str, name: &str) -> StorageKey {
    StorageKey(format!(
        "{score:0width$}{sep}{date}{sep}{name}",
        width = SCORE_WIDTH,
        sep = KEY_SEPARATOR,
    ))
}

/// Split a stored key back into a [`ScoreRecord`].
pub fn decode(key: &str) -> Result<ScoreRecord, MalformedKey> {
    let parts: Vec<&str> = key.split(KEY_SEPARATOR).collect();
    let [score, date, name] = parts.as_slice() else {
        return Err(MalformedKey::new(
            key,
            format!(
                "expected 3 '{}'-separated parts, found {}",
                KEY_SEPARATOR,
                parts.len()
            ),
        ));
    };

    let score = score
        .parse::<u16>()
        .map_err(|e| MalformedKey::new(key, format!("invalid score '{}': {}", score, e)))?;

    Ok(ScoreRecord {
        score,
        date: (*date).to_string(),
        name: (*name).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATE: &str = "2023-11-14T22:13:20";

    #[test]
    fn test_encode_pads_score() {
        assert!(encode(7, DATE, "ABC").as_str().starts_with("007/"));
        assert!(encode(42, DATE, "ABC").as_str().starts_with("042/"));
        assert!(encode(999, DATE, "ABC").as_str().starts_with("999/"));
    }

    #[test]
    fn test_encode_layout() {
        let key = encode(42, DATE, "ZZZ");
        assert_eq!(key.as_str(), "042/2023-11-14T22:13:20/ZZZ");
        assert_eq!(key.as_str().matches(KEY_SEPARATOR).count(), 2);
    }

    #[test]
    fn test_decode_round_trip() {
        let key = encode(7, DATE, "AAA");
        let record = decode(key.as_str()).unwrap();
        assert_eq!(record, ScoreRecord::new(7, DATE, "AAA"));
    }

    #[test]
    fn test_decode_strips_leading_zeros() {
        let record = decode("001/1970-01-01T00:00:00/QQQ").unwrap();
        assert_eq!(record.score, 1);
    }

    #[test]
    fn test_higher_score_sorts_after_lower() {
        let high = encode(500, DATE, "AAA");
        let low = encode(42, DATE, "AAA");
        assert!(high > low);
    }

    #[test]
    fn test_decode_without_separators_is_malformed() {
        let err = decode("042-2024-01-01T00:00:00-ABC").unwrap_err();
        assert_eq!(err.key, "042-2024-01-01T00:00:00-ABC");
        assert!(err.reason.contains("found 1"));
    }

    #[test]
    fn test_decode_extra_separator_is_malformed() {
        let err = decode("042/2024-01-01T00:00:00/ABC/X").unwrap_err();
        assert!(err.reason.contains("found 4"));
    }

    #[test]
    fn test_decode_non_numeric_score_is_malformed() {
        let err = decode("abc/2024-01-01T00:00:00/ABC").unwrap_err();
        assert!(err.reason.contains("invalid score"));
    }

    #[test]
    fn test_decode_empty_key_is_malformed() {
        assert!(decode("").is_err());
    }
}
