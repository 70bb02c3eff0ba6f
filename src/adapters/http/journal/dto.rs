//! HTTP DTOs for journaling and mood endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::journal::{
    ListJournalEntriesQuery, LogMoodCommand, WriteJournalEntryCommand, WriteJournalEntryResult,
};
use crate::domain::foundation::{Score, Stored, Timestamp, ValidationError};
use crate::domain::journal::{FocusArea, JournalEntry, MoodEntry, MoodShift};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to save a journal entry. Moods are 1-10.
#[derive(Debug, Clone, Deserialize)]
pub struct WriteEntryRequest {
    #[serde(default)]
    pub prompt: String,
    pub content: String,
    pub focus_area: FocusArea,
    pub mood_before: u8,
    pub mood_after: u8,
    #[serde(default)]
    pub emotional_state: String,
    #[serde(default)]
    pub insights: String,
}

impl TryFrom<WriteEntryRequest> for WriteJournalEntryCommand {
    type Error = ValidationError;

    fn try_from(req: WriteEntryRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            prompt: req.prompt,
            content: req.content,
            focus_area: req.focus_area,
            mood_before: Score::try_new(req.mood_before)?,
            mood_after: Score::try_new(req.mood_after)?,
            emotional_state: req.emotional_state,
            insights: req.insights,
        })
    }
}

/// Query parameters for listing entries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListEntriesParams {
    pub focus_area: Option<FocusArea>,
    pub search: Option<String>,
    pub since_days: Option<i64>,
    pub limit: Option<usize>,
}

impl From<ListEntriesParams> for ListJournalEntriesQuery {
    fn from(params: ListEntriesParams) -> Self {
        Self {
            focus_area: params.focus_area,
            search: params.search,
            since_days: params.since_days,
            limit: params.limit,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RandomPromptParams {
    pub focus_area: Option<FocusArea>,
}

/// Request to log a mood check-in.
#[derive(Debug, Clone, Deserialize)]
pub struct LogMoodRequest {
    pub overall_mood: u8,
    #[serde(default)]
    pub emotions: Vec<String>,
    #[serde(default)]
    pub triggers: Vec<String>,
}

impl TryFrom<LogMoodRequest> for LogMoodCommand {
    type Error = ValidationError;

    fn try_from(req: LogMoodRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            overall_mood: Score::try_new(req.overall_mood)?,
            emotions: req.emotions,
            triggers: req.triggers,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct JournalEntryResponse {
    pub id: String,
    pub created_at: Timestamp,
    pub prompt: String,
    pub content: String,
    pub focus_area: FocusArea,
    pub mood_before: u8,
    pub mood_after: u8,
    pub mood_change: i8,
    pub emotional_state: String,
    pub insights: String,
}

impl From<Stored<JournalEntry>> for JournalEntryResponse {
    fn from(stored: Stored<JournalEntry>) -> Self {
        let mood_change = stored.item.mood_change();
        let entry = stored.item;
        Self {
            id: stored.id.to_string(),
            created_at: stored.created_at,
            prompt: entry.prompt,
            content: entry.content,
            focus_area: entry.focus_area,
            mood_before: entry.mood_before.value(),
            mood_after: entry.mood_after.value(),
            mood_change,
            emotional_state: entry.emotional_state,
            insights: entry.insights,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WriteEntryResponse {
    pub entry: JournalEntryResponse,
    pub mood_change: i8,
    pub mood_shift: MoodShift,
    /// Encouragement matching the mood shift.
    pub message: &'static str,
}

impl From<WriteJournalEntryResult> for WriteEntryResponse {
    fn from(result: WriteJournalEntryResult) -> Self {
        Self {
            entry: result.entry.into(),
            mood_change: result.mood_change,
            mood_shift: result.mood_shift,
            message: result.mood_shift.message(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JournalListResponse {
    /// Newest first.
    pub entries: Vec<JournalEntryResponse>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoodEntryResponse {
    pub id: String,
    pub created_at: Timestamp,
    pub overall_mood: u8,
    pub emotions: Vec<String>,
    pub triggers: Vec<String>,
}

impl From<Stored<MoodEntry>> for MoodEntryResponse {
    fn from(stored: Stored<MoodEntry>) -> Self {
        Self {
            id: stored.id.to_string(),
            created_at: stored.created_at,
            overall_mood: stored.item.overall_mood.value(),
            emotions: stored.item.emotions,
            triggers: stored.item.triggers,
        }
    }
}
