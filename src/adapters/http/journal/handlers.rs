//! HTTP handlers for journaling and mood endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{
    error_response, storage_failure, validation_failure, ErrorResponse,
};
use crate::application::handlers::journal::{
    JournalError, ListJournalEntriesHandler, LogMoodCommand, LogMoodHandler, RandomPromptHandler,
    SuggestJournalPromptHandler, WriteJournalEntryCommand, WriteJournalEntryHandler,
};
use crate::domain::foundation::ErrorCode;

use super::dto::{
    JournalEntryResponse, JournalListResponse, ListEntriesParams, LogMoodRequest,
    MoodEntryResponse, RandomPromptParams, WriteEntryRequest, WriteEntryResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct JournalHandlers {
    write_handler: Arc<WriteJournalEntryHandler>,
    list_handler: Arc<ListJournalEntriesHandler>,
    log_mood_handler: Arc<LogMoodHandler>,
    suggest_handler: Arc<SuggestJournalPromptHandler>,
    random_handler: Arc<RandomPromptHandler>,
}

impl JournalHandlers {
    pub fn new(
        write_handler: Arc<WriteJournalEntryHandler>,
        list_handler: Arc<ListJournalEntriesHandler>,
        log_mood_handler: Arc<LogMoodHandler>,
        suggest_handler: Arc<SuggestJournalPromptHandler>,
        random_handler: Arc<RandomPromptHandler>,
    ) -> Self {
        Self {
            write_handler,
            list_handler,
            log_mood_handler,
            suggest_handler,
            random_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/journal/entries - Save a journal entry
pub async fn write_entry(
    State(handlers): State<JournalHandlers>,
    Json(req): Json<WriteEntryRequest>,
) -> Response {
    let cmd = match WriteJournalEntryCommand::try_from(req) {
        Ok(cmd) => cmd,
        Err(e) => return validation_failure(e),
    };

    match handlers.write_handler.handle(cmd).await {
        Ok(result) => {
            let response: WriteEntryResponse = result.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_journal_error(e),
    }
}

/// GET /api/journal/entries - List entries, newest first
pub async fn list_entries(
    State(handlers): State<JournalHandlers>,
    Query(params): Query<ListEntriesParams>,
) -> Response {
    match handlers.list_handler.handle(params.into()).await {
        Ok(entries) => {
            let entries: Vec<JournalEntryResponse> =
                entries.into_iter().map(Into::into).collect();
            let response = JournalListResponse {
                total: entries.len(),
                entries,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_journal_error(e),
    }
}

/// GET /api/journal/prompts/random - Prompt from the built-in bank
pub async fn random_prompt(
    State(handlers): State<JournalHandlers>,
    Query(params): Query<RandomPromptParams>,
) -> Response {
    let prompt = handlers.random_handler.handle(params.focus_area);
    (StatusCode::OK, Json(prompt)).into_response()
}

/// POST /api/journal/prompts/personalized - Prompt shaped by recent history
pub async fn personalized_prompt(State(handlers): State<JournalHandlers>) -> Response {
    match handlers.suggest_handler.handle().await {
        Ok(suggestion) => (StatusCode::OK, Json(suggestion)).into_response(),
        Err(e) => handle_journal_error(e),
    }
}

/// POST /api/mood - Log a mood check-in
pub async fn log_mood(
    State(handlers): State<JournalHandlers>,
    Json(req): Json<LogMoodRequest>,
) -> Response {
    let cmd = match LogMoodCommand::try_from(req) {
        Ok(cmd) => cmd,
        Err(e) => return validation_failure(e),
    };

    match handlers.log_mood_handler.handle(cmd).await {
        Ok(stored) => {
            let response: MoodEntryResponse = stored.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_journal_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_journal_error(error: JournalError) -> Response {
    match error {
        JournalError::Validation(e) => validation_failure(e),
        JournalError::NotEnoughHistory {
            min_moods,
            min_entries,
        } => error_response(
            ErrorCode::NotEnoughHistory,
            ErrorResponse::new(
                ErrorCode::NotEnoughHistory,
                "Log a few moods or write a journal entry to get personalized prompts",
            )
            .with_details(serde_json::json!({
                "min_mood_entries": min_moods,
                "min_journal_entries": min_entries,
            })),
        ),
        JournalError::Storage(e) => storage_failure(e),
    }
}
