//! Submission validation.
//!
//! Runs before the leaderboard core ever sees a submission: a body that fails
//! any check is rejected and nothing is written.
//!
//! The name check is a prefix match on `[A-Z]{3}`, so `"ABCDE"` is accepted
//! and stored as-is. The only other rule is that the name never contains the
//! key separator; a stored key must split into exactly three parts.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::codec::KEY_SEPARATOR;
use crate::error::ValidationError;
use crate::models::{ScoreSubmission, MAX_SCORE, MAX_UNIX_SECONDS, MIN_SCORE};

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}").expect("name pattern is a valid regex"));

/// Parse a raw request body and validate it as a submission.
pub fn parse_submission(body: &[u8]) -> Result<ScoreSubmission, ValidationError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ValidationError::InvalidJson(e.to_string()))?;
    validate_submission(&value)
}

/// Validate a decoded JSON body.
///
/// Checks, in order: all of `time`, `name` and `score` are present; `time` and
/// `score` are JSON integers and `name` is a string; the name pattern and
/// separator; the score range; and finally the `time` range.
pub fn validate_submission(body: &Value) -> Result<ScoreSubmission, ValidationError> {
    let obj = body.as_object().ok_or(ValidationError::NotAnObject)?;

    let time = obj.get("time").ok_or(ValidationError::MissingField("time"))?;
    let name = obj.get("name").ok_or(ValidationError::MissingField("name"))?;
    let score = obj
        .get("score")
        .ok_or(ValidationError::MissingField("score"))?;

    let time = integer_field("time", time)?;
    let score = integer_field("score", score)?;
    let name = name.as_str().ok_or(ValidationError::WrongType {
        field: "name",
        expected: "a string",
    })?;

    if !NAME_PATTERN.is_match(name) || name.contains(KEY_SEPARATOR) {
        return Err(ValidationError::InvalidName(name.to_string()));
    }

    if score < i128::from(MIN_SCORE) || score > i128::from(MAX_SCORE) {
        return Err(ValidationError::OutOfRange {
            field: "score",
            value: score.to_string(),
        });
    }

    // Timestamps past year 9999 would break the key's lexicographic date order.
    if time < 0 || time > i128::from(MAX_UNIX_SECONDS) {
        return Err(ValidationError::OutOfRange {
            field: "time",
            value: time.to_string(),
        });
    }

    Ok(ScoreSubmission {
        time: time as i64,
        name: name.to_string(),
        score: score as u16,
    })
}

/// Read a JSON integer. Floats (even `5.0`), booleans and strings are rejected.
fn integer_field(field: &'static str, value: &Value) -> Result<i128, ValidationError> {
    value
        .as_i64()
        .map(i128::from)
        .or_else(|| value.as_u64().map(i128::from))
        .ok_or(ValidationError::WrongType {
            field,
            expected: "an integer",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_submission() {
        let sub = validate_submission(&json!({"time": 1700000000, "name": "ZZZ", "score": 999}))
            .unwrap();
        assert_eq!(sub, ScoreSubmission::new(1_700_000_000, "ZZZ", 999));
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            validate_submission(&json!({"name": "ABC", "score": 1})),
            Err(ValidationError::MissingField("time"))
        );
        assert_eq!(
            validate_submission(&json!({"time": 1, "score": 1})),
            Err(ValidationError::MissingField("name"))
        );
        assert_eq!(
            validate_submission(&json!({"time": 1, "name": "ABC"})),
            Err(ValidationError::MissingField("score"))
        );
    }

    #[test]
    fn test_not_an_object() {
        assert_eq!(
            validate_submission(&json!([1, 2, 3])),
            Err(ValidationError::NotAnObject)
        );
    }

    #[test]
    fn test_lowercase_or_digit_name_rejected() {
        let result = validate_submission(&json!({"time": 1, "name": "ab1", "score": 10}));
        assert_eq!(result, Err(ValidationError::InvalidName("ab1".to_string())));
    }

    #[test]
    fn test_short_name_rejected() {
        let result = validate_submission(&json!({"time": 1, "name": "AB", "score": 10}));
        assert!(matches!(result, Err(ValidationError::InvalidName(_))));
    }

    #[test]
    fn test_name_with_separator_rejected() {
        for name in ["ABC/X", "ABC/", "ABCD/2024-01-01T00:00:00/ZZZ"] {
            let result = validate_submission(&json!({"time": 2, "name": name, "score": 7}));
            assert_eq!(result, Err(ValidationError::InvalidName(name.to_string())));
        }
    }

    #[test]
    fn test_name_is_prefix_match() {
        let sub = validate_submission(&json!({"time": 1, "name": "ABCDE", "score": 10})).unwrap();
        assert_eq!(sub.name, "ABCDE");
    }

    #[test]
    fn test_score_bounds() {
        for score in [0, 1000, -5] {
            let result = validate_submission(&json!({"time": 1, "name": "ABC", "score": score}));
            assert!(
                matches!(result, Err(ValidationError::OutOfRange { field: "score", .. })),
                "score {} should be rejected",
                score
            );
        }
        assert!(validate_submission(&json!({"time": 1, "name": "ABC", "score": 1})).is_ok());
        assert!(validate_submission(&json!({"time": 1, "name": "ABC", "score": 999})).is_ok());
    }

    #[test]
    fn test_negative_time_rejected() {
        let result = validate_submission(&json!({"time": -1, "name": "ABC", "score": 5}));
        assert!(matches!(
            result,
            Err(ValidationError::OutOfRange { field: "time", .. })
        ));
    }

    #[test]
    fn test_time_past_year_9999_rejected() {
        let result = validate_submission(
            &json!({"time": MAX_UNIX_SECONDS + 1, "name": "ABC", "score": 5}),
        );
        assert!(matches!(
            result,
            Err(ValidationError::OutOfRange { field: "time", .. })
        ));
    }

    #[test]
    fn test_huge_unsigned_time_rejected_as_out_of_range() {
        let result = validate_submission(&json!({"time": u64::MAX, "name": "ABC", "score": 5}));
        assert!(matches!(
            result,
            Err(ValidationError::OutOfRange { field: "time", .. })
        ));
    }

    #[test]
    fn test_non_integer_types_rejected() {
        let cases = [
            json!({"time": 1.5, "name": "ABC", "score": 5}),
            json!({"time": 1, "name": "ABC", "score": 5.0}),
            json!({"time": "1", "name": "ABC", "score": 5}),
            json!({"time": 1, "name": "ABC", "score": true}),
        ];
        for body in cases {
            assert!(
                matches!(
                    validate_submission(&body),
                    Err(ValidationError::WrongType { .. })
                ),
                "{} should be rejected",
                body
            );
        }
    }

    #[test]
    fn test_name_must_be_string() {
        let result = validate_submission(&json!({"time": 1, "name": 123, "score": 5}));
        assert_eq!(
            result,
            Err(ValidationError::WrongType {
                field: "name",
                expected: "a string"
            })
        );
    }

    #[test]
    fn test_parse_submission_invalid_json() {
        assert!(matches!(
            parse_submission(b"{not json"),
            Err(ValidationError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_parse_submission_valid() {
        let sub = parse_submission(br#"{"time": 0, "name": "AAA", "score": 1}"#).unwrap();
        assert_eq!(sub.time, 0);
    }
}
