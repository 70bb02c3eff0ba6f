//! HTTP adapter for journaling and mood endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    JournalEntryResponse, JournalListResponse, ListEntriesParams, LogMoodRequest,
    MoodEntryResponse, RandomPromptParams, WriteEntryRequest, WriteEntryResponse,
};
pub use handlers::JournalHandlers;
pub use routes::journal_routes;
