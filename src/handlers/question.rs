// src/handlers/question.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use serde_json::json;

use crate::{
    error::AppError,
    selection::{self, SelectError},
    store::{QuestionStore, ReviewLedger},
};

/// Query parameters for fetching a random question.
#[derive(Debug, Deserialize)]
pub struct QuestionParams {
    pub domain: Option<String>,
    pub user_id: Option<String>,
}

/// Serves one random unreviewed question (and a random candidate answer)
/// for the given domain and user.
///
/// * 400 when the domain parameter is missing or empty.
/// * 404 when the domain has no stored questions.
/// * 204 when the user has already reviewed every question in the domain.
/// * 500 when the selected question carries no answers.
pub async fn get_random_question(
    State(questions): State<Arc<dyn QuestionStore>>,
    State(ledger): State<Arc<dyn ReviewLedger>>,
    Query(params): Query<QuestionParams>,
) -> Result<Response, AppError> {
    let domain = params
        .domain
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::BadRequest("Domain parameter is required".to_string()))?;
    let user_id = params.user_id.unwrap_or_else(|| "anonymous".to_string());

    // StdRng rather than thread_rng so the handler future stays Send.
    let mut rng = StdRng::from_entropy();

    match selection::select(questions.as_ref(), ledger.as_ref(), &domain, &user_id, &mut rng).await
    {
        Ok(picked) => Ok(Json(json!({
            "question": picked.question,
            "selected_answer": picked.answer,
        }))
        .into_response()),
        Err(SelectError::NoQuestions(_)) => Err(AppError::NotFound(format!(
            "No questions found for domain: {}",
            domain
        ))),
        Err(SelectError::Exhausted) => Ok(StatusCode::NO_CONTENT.into_response()),
        Err(e @ SelectError::NoAnswers) => Err(AppError::InternalServerError(e.to_string())),
    }
}
