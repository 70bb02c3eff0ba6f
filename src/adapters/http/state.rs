//! Shared application state and the assembled API router.

use std::sync::Arc;

use axum::Router;

use crate::application::handlers::{
    AnalyzeThoughtHandler, ClearChatHistoryHandler, GetCbtProgressHandler,
    GetChatHistoryHandler, ListJournalEntriesHandler, LogMoodHandler, RandomPromptHandler,
    RecordThoughtHandler, SendChatMessageHandler, SuggestJournalPromptHandler,
    WriteJournalEntryHandler,
};
use crate::application::Companion;
use crate::domain::cbt::DistortionScreen;
use crate::domain::chat::HISTORY_WINDOW;
use crate::domain::safety::RiskScreen;
use crate::ports::RecordStore;

use super::cbt::{cbt_routes, CbtHandlers};
use super::chat::{chat_routes, ChatHandlers};
use super::health::{health_routes, HealthState};
use super::journal::{journal_routes, JournalHandlers};

/// Everything the handlers need. Screens are immutable and shared.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub risk_screen: Arc<RiskScreen>,
    pub distortion_screen: Arc<DistortionScreen>,
    pub companion: Companion,
    pub history_window: usize,
}

impl AppState {
    pub fn new(
        store: Arc<dyn RecordStore>,
        risk_screen: RiskScreen,
        distortion_screen: DistortionScreen,
        companion: Companion,
    ) -> Self {
        Self {
            store,
            risk_screen: Arc::new(risk_screen),
            distortion_screen: Arc::new(distortion_screen),
            companion,
            history_window: HISTORY_WINDOW,
        }
    }

    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }

    fn chat_handlers(&self) -> ChatHandlers {
        ChatHandlers::new(
            Arc::new(SendChatMessageHandler::new(
                self.store.clone(),
                self.risk_screen.clone(),
                self.companion.clone(),
                self.history_window,
            )),
            Arc::new(GetChatHistoryHandler::new(self.store.clone())),
            Arc::new(ClearChatHistoryHandler::new(self.store.clone())),
        )
    }

    fn cbt_handlers(&self) -> CbtHandlers {
        CbtHandlers::new(
            Arc::new(AnalyzeThoughtHandler::new(self.distortion_screen.clone())),
            Arc::new(RecordThoughtHandler::new(
                self.store.clone(),
                self.companion.clone(),
            )),
            Arc::new(GetCbtProgressHandler::new(self.store.clone())),
        )
    }

    fn journal_handlers(&self) -> JournalHandlers {
        JournalHandlers::new(
            Arc::new(WriteJournalEntryHandler::new(self.store.clone())),
            Arc::new(ListJournalEntriesHandler::new(self.store.clone())),
            Arc::new(LogMoodHandler::new(self.store.clone())),
            Arc::new(SuggestJournalPromptHandler::new(
                self.store.clone(),
                self.companion.clone(),
            )),
            Arc::new(RandomPromptHandler::new()),
        )
    }

    fn health_state(&self) -> HealthState {
        HealthState::new(
            self.risk_screen.clone(),
            self.distortion_screen.clone(),
            self.companion.provider_info(),
        )
    }
}

/// Builds every endpoint under `/api`.
pub fn api_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(chat_routes(state.chat_handlers()))
        .merge(cbt_routes(state.cbt_handlers()))
        .merge(journal_routes(state.journal_handlers()))
        .merge(health_routes(state.health_state()));

    Router::new().nest("/api", api)
}
