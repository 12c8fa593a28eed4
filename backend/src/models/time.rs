use chrono::DateTime;

/// Format used for leaderboard dates: ISO-8601, UTC, second precision, no offset.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Last Unix second whose date still has a four-digit year (9999-12-31T23:59:59).
///
/// Past this point the date string grows a fifth year digit and stops sorting
/// lexicographically in time order.
pub const MAX_UNIX_SECONDS: i64 = 253_402_300_799;

/// Convert Unix seconds into the leaderboard's ISO-8601 UTC date string.
///
/// Returns `None` for negative timestamps and for timestamps past
/// [`MAX_UNIX_SECONDS`].
pub fn iso_date_from_unix(seconds: i64) -> Option<String> {
    if !(0..=MAX_UNIX_SECONDS).contains(&seconds) {
        return None;
    }
    DateTime::from_timestamp(seconds, 0).map(|dt| dt.format(ISO_DATE_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        assert_eq!(iso_date_from_unix(0).unwrap(), "1970-01-01T00:00:00");
    }

    #[test]
    fn test_known_timestamps() {
        assert_eq!(
            iso_date_from_unix(1_700_000_000).unwrap(),
            "2023-11-14T22:13:20"
        );
        assert_eq!(
            iso_date_from_unix(1_700_000_100).unwrap(),
            "2023-11-14T22:15:00"
        );
    }

    #[test]
    fn test_upper_bound() {
        assert_eq!(
            iso_date_from_unix(MAX_UNIX_SECONDS).unwrap(),
            "9999-12-31T23:59:59"
        );
        assert!(iso_date_from_unix(MAX_UNIX_SECONDS + 1).is_none());
    }

    #[test]
    fn test_negative_rejected() {
        assert!(iso_date_from_unix(-1).is_none());
    }

    #[test]
    fn test_dates_sort_like_timestamps() {
        let earlier = iso_date_from_unix(999_999_999).unwrap();
        let later = iso_date_from_unix(1_000_000_000).unwrap();
        assert!(earlier < later);
    }
}
