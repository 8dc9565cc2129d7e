// src/models/response.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A submitted annotation as received from the client.
/// Field names follow the wire format (mixed casing kept as-is).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewResponse {
    pub user_id: String,
    pub domain: String,
    #[serde(rename = "questionId")]
    pub question_id: String,
    #[serde(rename = "answerId")]
    pub answer_id: String,
    /// Criterion name -> numeric score.
    pub ratings: HashMap<String, f64>,
}

/// A persisted annotation. Identical to `NewResponse` plus the
/// server-assigned timestamp stamped at append time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub user_id: String,
    pub domain: String,
    #[serde(rename = "questionId")]
    pub question_id: String,
    #[serde(rename = "answerId")]
    pub answer_id: String,
    /// Optional on read so hand-edited logs without ratings still parse;
    /// submitted responses always carry it.
    #[serde(default)]
    pub ratings: Option<HashMap<String, f64>>,
    pub timestamp: DateTime<Utc>,
}

impl Response {
    pub fn from_submission(new: NewResponse, timestamp: DateTime<Utc>) -> Self {
        Self {
            user_id: new.user_id,
            domain: new.domain,
            question_id: new.question_id,
            answer_id: new.answer_id,
            ratings: Some(new.ratings),
            timestamp,
        }
    }
}
