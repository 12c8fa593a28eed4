//! Property tests for the storage key codec.

use proptest::prelude::*;

use leaderboard::codec::{decode, encode};
use leaderboard::models::{iso_date_from_unix, ScoreRecord, MAX_UNIX_SECONDS};

fn date() -> impl Strategy<Value = String> {
    (0..=MAX_UNIX_SECONDS).prop_map(|secs| iso_date_from_unix(secs).unwrap())
}

proptest! {
    #[test]
    fn decode_inverts_encode(score in 1u16..=999, date in date(), name in "[A-Z]{3}") {
        let key = encode(score, &date, &name);
        prop_assert_eq!(decode(key.as_str()).unwrap(), ScoreRecord::new(score, date, name));
    }

    #[test]
    fn key_order_follows_score(a in 1u16..=999, b in 1u16..=999, date in date(), name in "[A-Z]{3}") {
        prop_assume!(a != b);
        let ka = encode(a, &date, &name);
        let kb = encode(b, &date, &name);
        prop_assert_eq!(a < b, ka < kb);
    }

    #[test]
    fn key_order_follows_time_within_score(
        score in 1u16..=999,
        t1 in 0..=MAX_UNIX_SECONDS,
        t2 in 0..=MAX_UNIX_SECONDS,
    ) {
        prop_assume!(t1 != t2);
        let k1 = encode(score, &iso_date_from_unix(t1).unwrap(), "ABC");
        let k2 = encode(score, &iso_date_from_unix(t2).unwrap(), "ABC");
        prop_assert_eq!(t1 < t2, k1 < k2);
    }

    #[test]
    fn keys_without_two_separators_are_rejected(s in "[^/]*") {
        prop_assert!(decode(&s).is_err());
    }
}
