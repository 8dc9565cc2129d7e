// src/store/mod.rs

pub mod ledger;
pub mod memory;
pub mod question;
pub mod response_log;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::question::Question;
use crate::models::response::{NewResponse, Response};

pub use ledger::FileReviewLedger;
pub use memory::{MemoryQuestionStore, MemoryReviewLedger, MemoryResponseLog};
pub use question::FileQuestionStore;
pub use response_log::FileResponseLog;

pub const RESPONSES_FILE: &str = "responses.json";
pub const REVIEWED_FILE: &str = "reviewed_questions.json";

/// Read-only access to the per-domain question sets.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Loads every question for `domain`. Missing file, unparseable content,
    /// or an absent `questions` member all degrade to an empty vector; the
    /// caller distinguishes "no questions" only by emptiness.
    async fn load(&self, domain: &str) -> Vec<Question>;
}

/// Per-user record of which question ids have already been shown.
/// The set grows monotonically; nothing ever removes an entry.
#[async_trait]
pub trait ReviewLedger: Send + Sync {
    /// Reviewed question ids for `user_id`; empty for unknown users.
    async fn get(&self, user_id: &str) -> HashSet<String>;

    /// Idempotent add of `question_id` to the user's reviewed set.
    async fn record(&self, user_id: &str, question_id: &str) -> Result<(), StoreError>;
}

/// Append-only log of submitted annotations.
#[async_trait]
pub trait ResponseLog: Send + Sync {
    /// Stamps the current wall-clock time and persists the response.
    /// Returns the record as persisted.
    async fn append(&self, new: NewResponse) -> Result<Response, StoreError>;

    /// Every persisted response, in append order.
    async fn read_all(&self) -> Result<Vec<Response>, StoreError>;
}

/// Normalizes a domain name to its file key: lowercased, spaces replaced
/// with dashes (e.g. "Material Science" -> "material-science").
pub fn domain_key(domain: &str) -> String {
    domain.to_lowercase().replace(' ', "-")
}

/// Question file name for a domain, e.g. "material-science-questions.json".
pub fn domain_file_name(domain: &str) -> String {
    format!("{}-questions.json", domain_key(domain))
}

/// Creates the data directory and seeds the two mutable files with their
/// empty representations when absent. Called once at startup.
pub fn init_data_files(data_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(data_dir)?;

    let responses = data_dir.join(RESPONSES_FILE);
    if !responses.exists() {
        fs::write(&responses, "[]")?;
    }

    let reviewed = data_dir.join(REVIEWED_FILE);
    if !reviewed.exists() {
        fs::write(&reviewed, "{}")?;
    }

    Ok(())
}
