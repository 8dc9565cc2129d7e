// src/handlers/response.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use crate::{
    error::AppError,
    models::response::NewResponse,
    store::{ResponseLog, ReviewLedger},
};

const REQUIRED_FIELDS: [&str; 5] = ["user_id", "domain", "questionId", "answerId", "ratings"];

/// Accepts a submitted annotation.
///
/// Validation is field-presence only; a 400 lists every missing field by
/// name. On success the response is appended to the log (timestamped
/// server-side) and the question is marked reviewed for the user. Nothing
/// prevents repeated submissions for the same question; each one appends
/// and re-records independently.
pub async fn submit_response(
    State(ledger): State<Arc<dyn ReviewLedger>>,
    State(responses): State<Arc<dyn ResponseLog>>,
    Json(payload): Json<serde_json::Value>,
) -> Result<impl IntoResponse, AppError> {
    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .filter(|field| payload.get(**field).is_none())
        .copied()
        .collect();

    if !missing.is_empty() {
        return Err(AppError::BadRequest(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let submission: NewResponse = serde_json::from_value(payload)?;
    let user_id = submission.user_id.clone();
    let question_id = submission.question_id.clone();

    responses.append(submission).await.map_err(|e| {
        tracing::error!("Failed to append response: {}", e);
        AppError::from(e)
    })?;

    ledger.record(&user_id, &question_id).await.map_err(|e| {
        tracing::error!("Failed to record reviewed question: {}", e);
        AppError::from(e)
    })?;

    Ok(Json(json!({ "success": true })))
}

/// Exports the full response log.
pub async fn export_data(
    State(responses): State<Arc<dyn ResponseLog>>,
) -> Result<impl IntoResponse, AppError> {
    let all = responses.read_all().await.map_err(|e| {
        tracing::error!("Failed to read response log: {}", e);
        AppError::InternalServerError(format!("Error exporting data: {}", e))
    })?;

    Ok(Json(all))
}
