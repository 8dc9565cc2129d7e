// src/store/memory.rs
//
// In-memory store implementations backing the test suites. Same contracts
// as the file-backed stores, minus the on-disk degradation paths.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::models::question::Question;
use crate::models::response::{NewResponse, Response};
use crate::store::{QuestionStore, ResponseLog, ReviewLedger, domain_key};

#[derive(Default)]
pub struct MemoryQuestionStore {
    sets: HashMap<String, Vec<Question>>,
}

impl MemoryQuestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domain(mut self, domain: &str, questions: Vec<Question>) -> Self {
        self.sets.insert(domain_key(domain), questions);
        self
    }
}

#[async_trait]
impl QuestionStore for MemoryQuestionStore {
    async fn load(&self, domain: &str) -> Vec<Question> {
        self.sets
            .get(&domain_key(domain))
            .cloned()
            .unwrap_or_default()
    }
}

#[derive(Default)]
pub struct MemoryReviewLedger {
    reviewed: Mutex<HashMap<String, HashSet<String>>>,
}

impl MemoryReviewLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReviewLedger for MemoryReviewLedger {
    async fn get(&self, user_id: &str) -> HashSet<String> {
        self.reviewed
            .lock()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    async fn record(&self, user_id: &str, question_id: &str) -> Result<(), StoreError> {
        self.reviewed
            .lock()
            .await
            .entry(user_id.to_string())
            .or_default()
            .insert(question_id.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryResponseLog {
    responses: Mutex<Vec<Response>>,
}

impl MemoryResponseLog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResponseLog for MemoryResponseLog {
    async fn append(&self, new: NewResponse) -> Result<Response, StoreError> {
        let response = Response::from_submission(new, Utc::now());
        self.responses.lock().await.push(response.clone());
        Ok(response)
    }

    async fn read_all(&self) -> Result<Vec<Response>, StoreError> {
        Ok(self.responses.lock().await.clone())
    }
}
