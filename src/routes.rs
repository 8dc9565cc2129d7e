// src/routes.rs

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{question, response, stats},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Wires the four annotation endpoints.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (storage handles + config).
pub fn create_router(state: AppState) -> Router {
    // The annotation frontend is served from arbitrary hosts, so CORS is
    // open to any origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .route("/api/question", get(question::get_random_question))
        .route("/api/response", post(response::submit_response))
        .route("/api/export", get(response::export_data))
        .route("/api/stats", get(stats::get_stats))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
