// src/store/question.rs

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::models::question::{Question, QuestionFile};
use crate::store::{QuestionStore, domain_file_name};

/// Question sets stored as static JSON documents under the data directory,
/// one file per domain. Read fresh from disk on every call, so edits to the
/// files take effect immediately.
pub struct FileQuestionStore {
    data_dir: PathBuf,
}

impl FileQuestionStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

#[async_trait]
impl QuestionStore for FileQuestionStore {
    async fn load(&self, domain: &str) -> Vec<Question> {
        let path = self.data_dir.join(domain_file_name(domain));

        let raw = match fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Error loading domain questions from {}: {}", path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<QuestionFile>(&raw) {
            Ok(file) => file.questions,
            Err(e) => {
                tracing::warn!("Error parsing domain questions in {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }
}
