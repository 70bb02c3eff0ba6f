//! HTTP routes for CBT endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    analyze_thought, get_progress, list_distortions, record_thought, CbtHandlers,
};

/// Creates the CBT router.
pub fn cbt_routes(handlers: CbtHandlers) -> Router {
    Router::new()
        .route("/cbt/analyze", post(analyze_thought))
        .route("/cbt/thought-records", post(record_thought))
        .route("/cbt/progress", get(get_progress))
        .route("/cbt/distortions", get(list_distortions))
        .with_state(handlers)
}
