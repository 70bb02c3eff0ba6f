//! SuggestJournalPrompt query handler.
//!
//! Personalises a prompt from the last week of mood check-ins and the
//! themes of recent journal entries. Needs some history to work from;
//! older check-ins count toward that history.

use std::sync::Arc;

use serde::Serialize;

use crate::application::companion::Companion;
use crate::domain::foundation::Timestamp;
use crate::domain::journal::{
    journal_themes, JournalEntry, MoodContext, MoodEntry, PersonalizedPrompt, PromptTone,
    RECENT_MOOD_DAYS,
};
use crate::ports::{load_items, RecordFilter, RecordStore};

use super::JournalError;

/// Mood check-ins needed when there are no journal entries.
pub const MIN_MOOD_ENTRIES: usize = 2;
/// Journal entries needed when there are too few mood check-ins.
pub const MIN_JOURNAL_ENTRIES: usize = 1;

const RECENT_JOURNAL_ENTRIES: usize = 10;
const THEME_LIMIT: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct JournalSuggestion {
    #[serde(flatten)]
    pub prompt: PersonalizedPrompt,
    pub tone: PromptTone,
    pub tone_description: &'static str,
    pub recent_average_mood: f64,
    pub used_fallback: bool,
}

pub struct SuggestJournalPromptHandler {
    store: Arc<dyn RecordStore>,
    companion: Companion,
}

impl SuggestJournalPromptHandler {
    pub fn new(store: Arc<dyn RecordStore>, companion: Companion) -> Self {
        Self { store, companion }
    }

    pub async fn handle(&self) -> Result<JournalSuggestion, JournalError> {
        // Every check-in counts toward history; only the last week shapes the context
        let moods = load_items::<MoodEntry>(self.store.as_ref(), RecordFilter::all()).await?;
        let mood_count = moods.len();
        let cutoff = Timestamp::now().minus_days(RECENT_MOOD_DAYS);
        let recent_moods: Vec<MoodEntry> = moods
            .into_iter()
            .filter(|s| !s.created_at.is_before(&cutoff))
            .map(|s| s.item)
            .collect();

        let entries: Vec<JournalEntry> = load_items::<JournalEntry>(
            self.store.as_ref(),
            RecordFilter::all().limit(RECENT_JOURNAL_ENTRIES),
        )
        .await?
        .into_iter()
        .map(|s| s.item)
        .collect();

        if mood_count < MIN_MOOD_ENTRIES && entries.len() < MIN_JOURNAL_ENTRIES {
            return Err(JournalError::NotEnoughHistory {
                min_moods: MIN_MOOD_ENTRIES,
                min_entries: MIN_JOURNAL_ENTRIES,
            });
        }

        let context = MoodContext::from_entries(&recent_moods);
        let mut themes = journal_themes(&entries);
        themes.truncate(THEME_LIMIT);
        let tone = context.tone();

        let (prompt, used_fallback) = match self
            .companion
            .generate_journal_prompt(&context, &themes)
            .await
        {
            Ok(prompt) => (prompt, false),
            Err(e) => {
                tracing::warn!(error = %e, "personalized prompt unavailable, using fallback");
                (PersonalizedPrompt::fallback(), true)
            }
        };

        Ok(JournalSuggestion {
            prompt,
            tone,
            tone_description: tone.description(),
            recent_average_mood: context.recent_average,
            used_fallback,
        })
    }
}
