//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod cbt;
pub mod chat;
pub mod journal;

pub use cbt::{
    AnalyzeThoughtHandler, CbtError, GetCbtProgressHandler, RecordThoughtCommand,
    RecordThoughtHandler, RecordThoughtResult, ThoughtAnalysis,
};
pub use chat::{
    ChatError, ClearChatHistoryHandler, GetChatHistoryHandler, GetChatHistoryQuery,
    SendChatMessageCommand, SendChatMessageHandler, SendChatMessageResult,
};
pub use journal::{
    JournalError, JournalSuggestion, ListJournalEntriesHandler, ListJournalEntriesQuery,
    LogMoodCommand, LogMoodHandler, RandomPrompt, RandomPromptHandler,
    SuggestJournalPromptHandler, WriteJournalEntryCommand, WriteJournalEntryHandler,
    WriteJournalEntryResult,
};
