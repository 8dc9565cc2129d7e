// src/models/question.rs

use serde::{Deserialize, Serialize};

/// A quiz question as stored in a `<domain>-questions.json` file.
/// Immutable at runtime; question sets are only ever edited on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique within its domain (e.g. "chem-q1").
    pub id: String,

    /// The text content of the question.
    pub text: String,

    /// Candidate answers. Questions stored without an `answers` member
    /// load with an empty list and are reported as having no answers
    /// if selected.
    #[serde(default)]
    pub answers: Vec<Answer>,
}

/// One candidate answer owned by its parent question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub id: String,
    pub text: String,
}

/// On-disk shape of a per-domain question file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionFile {
    pub questions: Vec<Question>,
}
