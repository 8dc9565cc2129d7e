// src/store/ledger.rs

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::store::{REVIEWED_FILE, ReviewLedger};

/// The reviewed-questions ledger: a single JSON object mapping user id to
/// the array of question ids already shown to that user. Every update is a
/// whole-file read-modify-write; writes within this process serialize
/// through `write_lock`, concurrent external writers still race with
/// last-write-wins.
pub struct FileReviewLedger {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileReviewLedger {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(REVIEWED_FILE),
            write_lock: Mutex::new(()),
        }
    }

    /// Reads the full ledger, degrading a missing or corrupt file to an
    /// empty map. Entries stay as ordered vectors to preserve the on-disk
    /// representation when rewritten.
    async fn load_map(&self) -> HashMap<String, Vec<String>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Error loading reviewed questions: {}", e);
                return HashMap::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!("Error parsing reviewed questions: {}", e);
                HashMap::new()
            }
        }
    }
}

#[async_trait]
impl ReviewLedger for FileReviewLedger {
    async fn get(&self, user_id: &str) -> HashSet<String> {
        self.load_map()
            .await
            .remove(user_id)
            .unwrap_or_default()
            .into_iter()
            .collect()
    }

    async fn record(&self, user_id: &str, question_id: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut reviewed = self.load_map().await;
        let entries = reviewed.entry(user_id.to_string()).or_default();
        if !entries.iter().any(|id| id == question_id) {
            entries.push(question_id.to_string());
        }

        let raw = serde_json::to_string(&reviewed)?;
        fs::write(&self.path, raw).await?;
        Ok(())
    }
}
