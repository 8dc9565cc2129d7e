// src/handlers/stats.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};

use crate::{error::AppError, stats, store::ResponseLog};

/// Computes aggregate annotation statistics over the full response log.
pub async fn get_stats(
    State(responses): State<Arc<dyn ResponseLog>>,
) -> Result<impl IntoResponse, AppError> {
    let all = responses.read_all().await.map_err(|e| {
        tracing::error!("Failed to read response log: {}", e);
        AppError::InternalServerError(format!("Error fetching stats: {}", e))
    })?;

    Ok(Json(stats::compute(&all)))
}
