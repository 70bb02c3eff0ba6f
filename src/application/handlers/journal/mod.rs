//! Journal and mood command and query handlers.

mod list_journal_entries;
mod log_mood;
mod random_prompt;
mod suggest_journal_prompt;
mod write_journal_entry;

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::ports::RecordStoreError;

pub use list_journal_entries::{ListJournalEntriesHandler, ListJournalEntriesQuery};
pub use log_mood::{LogMoodCommand, LogMoodHandler};
pub use random_prompt::{RandomPrompt, RandomPromptHandler};
pub use suggest_journal_prompt::{
    JournalSuggestion, SuggestJournalPromptHandler, MIN_JOURNAL_ENTRIES, MIN_MOOD_ENTRIES,
};
pub use write_journal_entry::{
    WriteJournalEntryCommand, WriteJournalEntryHandler, WriteJournalEntryResult,
};

/// Errors from journal handlers.
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Too little history to personalise a prompt.
    #[error("not enough history: log at least {min_moods} moods or write {min_entries} journal entry")]
    NotEnoughHistory { min_moods: usize, min_entries: usize },

    #[error("storage error: {0}")]
    Storage(#[from] RecordStoreError),
}
