// src/selection.rs

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::question::{Answer, Question};
use crate::store::{QuestionStore, ReviewLedger};

/// A successful selection: one question and one of its candidate answers,
/// both drawn uniformly at random.
#[derive(Debug, Clone)]
pub struct Picked {
    pub question: Question,
    pub answer: Answer,
}

/// The three ways a selection can come up empty. `NoQuestions` (the domain
/// has no stored questions at all) and `Exhausted` (questions exist but the
/// user has reviewed every one) are deliberately distinct outcomes.
#[derive(Debug)]
pub enum SelectError {
    NoQuestions(String),
    Exhausted,
    NoAnswers,
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectError::NoQuestions(domain) => {
                write!(f, "No questions found for domain: {}", domain)
            }
            SelectError::Exhausted => write!(f, "All questions have been reviewed"),
            SelectError::NoAnswers => write!(f, "No answers found for the selected question"),
        }
    }
}

impl std::error::Error for SelectError {}

/// Picks a random unreviewed question for `user_id` in `domain`, then a
/// random answer from it.
///
/// Selection has no side effect on the review ledger: a question fetched
/// but never answered stays eligible. Marking-as-reviewed happens only when
/// a response is submitted.
pub async fn select<R: Rng>(
    questions: &dyn QuestionStore,
    ledger: &dyn ReviewLedger,
    domain: &str,
    user_id: &str,
    rng: &mut R,
) -> Result<Picked, SelectError> {
    let pool = questions.load(domain).await;
    if pool.is_empty() {
        return Err(SelectError::NoQuestions(domain.to_string()));
    }

    let reviewed = ledger.get(user_id).await;
    let available: Vec<&Question> = pool.iter().filter(|q| !reviewed.contains(&q.id)).collect();

    let question = match available.choose(rng) {
        Some(q) => (*q).clone(),
        None => return Err(SelectError::Exhausted),
    };

    let answer = match question.answers.choose(rng) {
        Some(a) => a.clone(),
        None => return Err(SelectError::NoAnswers),
    };

    Ok(Picked { question, answer })
}
