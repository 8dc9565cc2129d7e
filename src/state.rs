use crate::config::Config;
use crate::store::{
    FileQuestionStore, FileResponseLog, FileReviewLedger, QuestionStore, ResponseLog, ReviewLedger,
};
use axum::extract::FromRef;
use std::sync::Arc;

/// Shared application state: the three storage handles behind their trait
/// seams, plus the configuration. Handlers extract the pieces they need
/// via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub questions: Arc<dyn QuestionStore>,
    pub ledger: Arc<dyn ReviewLedger>,
    pub responses: Arc<dyn ResponseLog>,
    pub config: Config,
}

impl AppState {
    /// Production wiring: file-backed stores under the configured data
    /// directory.
    pub fn from_config(config: Config) -> Self {
        Self {
            questions: Arc::new(FileQuestionStore::new(&config.data_dir)),
            ledger: Arc::new(FileReviewLedger::new(&config.data_dir)),
            responses: Arc::new(FileResponseLog::new(&config.data_dir)),
            config,
        }
    }
}

impl FromRef<AppState> for Arc<dyn QuestionStore> {
    fn from_ref(state: &AppState) -> Self {
        state.questions.clone()
    }
}

impl FromRef<AppState> for Arc<dyn ReviewLedger> {
    fn from_ref(state: &AppState) -> Self {
        state.ledger.clone()
    }
}

impl FromRef<AppState> for Arc<dyn ResponseLog> {
    fn from_ref(state: &AppState) -> Self {
        state.responses.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
