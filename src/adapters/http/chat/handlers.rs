//! HTTP handlers for chat endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{storage_failure, validation_failure};
use crate::application::handlers::chat::{
    ChatError, ClearChatHistoryHandler, GetChatHistoryHandler, GetChatHistoryQuery,
    SendChatMessageCommand, SendChatMessageHandler,
};

use super::dto::{
    ChatHistoryResponse, ChatMessageResponse, ClearHistoryResponse, HistoryParams,
    SendMessageRequest, SendMessageResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ChatHandlers {
    send_handler: Arc<SendChatMessageHandler>,
    history_handler: Arc<GetChatHistoryHandler>,
    clear_handler: Arc<ClearChatHistoryHandler>,
}

impl ChatHandlers {
    pub fn new(
        send_handler: Arc<SendChatMessageHandler>,
        history_handler: Arc<GetChatHistoryHandler>,
        clear_handler: Arc<ClearChatHistoryHandler>,
    ) -> Self {
        Self {
            send_handler,
            history_handler,
            clear_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/chat/messages - Send a message and get the companion's reply
pub async fn send_message(
    State(handlers): State<ChatHandlers>,
    Json(req): Json<SendMessageRequest>,
) -> Response {
    let cmd = SendChatMessageCommand {
        content: req.content,
        persona: req.persona,
    };

    match handlers.send_handler.handle(cmd).await {
        Ok(result) => {
            let response: SendMessageResponse = result.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_chat_error(e),
    }
}

/// GET /api/chat/messages - Stored conversation, oldest first
pub async fn get_history(
    State(handlers): State<ChatHandlers>,
    Query(params): Query<HistoryParams>,
) -> Response {
    let query = GetChatHistoryQuery {
        limit: params.limit,
    };

    match handlers.history_handler.handle(query).await {
        Ok(messages) => {
            let messages: Vec<ChatMessageResponse> =
                messages.into_iter().map(Into::into).collect();
            let response = ChatHistoryResponse {
                total: messages.len(),
                messages,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_chat_error(e),
    }
}

/// DELETE /api/chat/messages - Clear the conversation
pub async fn clear_history(State(handlers): State<ChatHandlers>) -> Response {
    match handlers.clear_handler.handle().await {
        Ok(removed) => (StatusCode::OK, Json(ClearHistoryResponse { removed })).into_response(),
        Err(e) => handle_chat_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_chat_error(error: ChatError) -> Response {
    match error {
        ChatError::Validation(e) => validation_failure(e),
        ChatError::Storage(e) => storage_failure(e),
    }
}
