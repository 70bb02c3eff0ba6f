//! HTTP routes for chat endpoints.

use axum::{routing::post, Router};

use super::handlers::{clear_history, get_history, send_message, ChatHandlers};

/// Creates the chat router.
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route(
            "/chat/messages",
            post(send_message).get(get_history).delete(clear_history),
        )
        .with_state(handlers)
}
