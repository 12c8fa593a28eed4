//! CDN edge event handler.
//!
//! The leaderboard can also run behind a CDN edge function that hands over
//! request events instead of HTTP connections. An event looks like
//!
//! ```json
//! {"Records": [{"cf": {"request": {
//!     "method": "POST",
//!     "uri": "/scores",
//!     "body": {"data": "<base64 JSON>"}
//! }}}]}
//! ```
//!
//! and the handler answers with the CDN's response shape: a string `status`, a
//! `statusDescription`, optional `headers` in `{name: [{key, value}]}` form and
//! an optional string `body`.
//!
//! Routing is deliberately loose: any uri containing `/scores` matches.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{LeaderboardResult, ValidationError};
use crate::models::ScoreSubmission;
use crate::services::{Leaderboard, DEFAULT_TOP_LIMIT};
use crate::validation::parse_submission;

const SCORES_PATH: &str = "/scores";

/// Event delivered by the CDN.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<EdgeRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub cf: EdgePayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgePayload {
    pub request: EdgeRequest,
}

/// The viewer request forwarded by the CDN.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRequest {
    pub method: String,
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<EdgeBody>,
}

impl EdgeRequest {
    /// Build a request whose body is `json` encoded the way the CDN does it.
    pub fn with_json_body(method: impl Into<String>, uri: impl Into<String>, json: &str) -> Self {
        Self {
            method: method.into(),
            uri: uri.into(),
            body: Some(EdgeBody {
                data: STANDARD.encode(json),
                encoding: Some("base64".to_string()),
            }),
        }
    }
}

/// Request body; `data` is base64.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeBody {
    #[serde(default)]
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeHeader {
    pub key: String,
    pub value: String,
}

/// Response returned to the CDN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeResponse {
    pub status: String,
    #[serde(rename = "statusDescription")]
    pub status_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, Vec<EdgeHeader>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl EdgeResponse {
    fn new(status: u16, description: &str) -> Self {
        Self {
            status: status.to_string(),
            status_description: description.to_string(),
            headers: None,
            body: None,
        }
    }

    pub fn ok() -> Self {
        Self::new(200, "OK")
    }

    pub fn bad_request() -> Self {
        Self::new(400, "Bad Request")
    }

    pub fn not_found() -> Self {
        Self {
            body: Some("Not Found".to_string()),
            ..Self::new(404, "Not Found")
        }
    }

    /// `200 OK` carrying `value` serialized as JSON.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> LeaderboardResult<Self> {
        let body = serde_json::to_string(value)?;
        let mut headers = BTreeMap::new();
        headers.insert(
            "content-type".to_string(),
            vec![EdgeHeader {
                key: "Content-Type".to_string(),
                value: "application/json".to_string(),
            }],
        );
        Ok(Self {
            headers: Some(headers),
            body: Some(body),
            ..Self::ok()
        })
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status.parse().ok()
    }
}

/// Handle the first record of a CDN event.
///
/// An event without records is answered with `400 Bad Request`.
pub async fn handle_event(
    leaderboard: &Leaderboard,
    event: &EdgeEvent,
) -> LeaderboardResult<EdgeResponse> {
    match event.records.first() {
        Some(record) => handle_request(leaderboard, &record.cf.request).await,
        None => {
            warn!("edge event without records");
            Ok(EdgeResponse::bad_request())
        }
    }
}

/// Route a single edge request.
///
/// Store failures and malformed stored keys are returned as errors so the
/// CDN reports an origin failure instead of a partial leaderboard.
pub async fn handle_request(
    leaderboard: &Leaderboard,
    request: &EdgeRequest,
) -> LeaderboardResult<EdgeResponse> {
    info!("method={}, path={}", request.method, request.uri);

    if !request.uri.contains(SCORES_PATH) {
        return Ok(EdgeResponse::not_found());
    }

    match request.method.as_str() {
        "GET" => {
            let records = leaderboard.query_top(DEFAULT_TOP_LIMIT).await?;
            EdgeResponse::json(&records)
        }
        "POST" => match extract_submission(request) {
            Ok(submission) => {
                leaderboard.submit(&submission).await?;
                Ok(EdgeResponse::ok())
            }
            Err(e) => {
                warn!("rejected submission: {}", e);
                Ok(EdgeResponse::bad_request())
            }
        },
        _ => Ok(EdgeResponse::not_found()),
    }
}

/// Decode the base64 body and validate it as a submission.
fn extract_submission(request: &EdgeRequest) -> Result<ScoreSubmission, ValidationError> {
    let data = request
        .body
        .as_ref()
        .map(|b| b.data.as_str())
        .unwrap_or_default();
    let bytes = STANDARD
        .decode(data)
        .map_err(|e| ValidationError::InvalidJson(format!("body is not base64: {}", e)))?;
    parse_submission(&bytes)
}
