//! HTTP routes for journaling and mood endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    list_entries, log_mood, personalized_prompt, random_prompt, write_entry, JournalHandlers,
};

/// Creates the journal router, including mood check-ins.
pub fn journal_routes(handlers: JournalHandlers) -> Router {
    Router::new()
        .route("/journal/entries", post(write_entry).get(list_entries))
        .route("/journal/prompts/random", get(random_prompt))
        .route("/journal/prompts/personalized", post(personalized_prompt))
        .route("/mood", post(log_mood))
        .with_state(handlers)
}
