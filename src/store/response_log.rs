// src/store/response_log.rs

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::fs;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::models::response::{NewResponse, Response};
use crate::store::{RESPONSES_FILE, ResponseLog};

/// The response log: a pretty-printed JSON array rewritten in full on every
/// append. Appends within this process serialize through `write_lock`.
pub struct FileResponseLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileResponseLog {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(RESPONSES_FILE),
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl ResponseLog for FileResponseLog {
    async fn append(&self, new: NewResponse) -> Result<Response, StoreError> {
        let _guard = self.write_lock.lock().await;

        // The append path tolerates an unreadable log and starts over from
        // empty; only the read endpoints surface log corruption as an error.
        let mut responses: Vec<Response> = match fs::read_to_string(&self.path).await {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("Error parsing response log, starting fresh: {}", e);
                Vec::new()
            }),
            Err(e) => {
                tracing::warn!("Error reading response log, starting fresh: {}", e);
                Vec::new()
            }
        };

        let response = Response::from_submission(new, Utc::now());
        responses.push(response.clone());

        let raw = serde_json::to_string_pretty(&responses)?;
        fs::write(&self.path, raw).await?;
        Ok(response)
    }

    async fn read_all(&self) -> Result<Vec<Response>, StoreError> {
        let raw = fs::read_to_string(&self.path).await?;
        let responses = serde_json::from_str(&raw)?;
        Ok(responses)
    }
}
