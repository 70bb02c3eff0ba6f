//! WriteJournalEntry command handler.

use std::sync::Arc;

use crate::domain::foundation::{Score, Stored};
use crate::domain::journal::{FocusArea, JournalEntry, MoodShift};
use crate::ports::{save_item, RecordStore};

use super::JournalError;

#[derive(Debug, Clone)]
pub struct WriteJournalEntryCommand {
    pub prompt: String,
    pub content: String,
    pub focus_area: FocusArea,
    pub mood_before: Score,
    pub mood_after: Score,
    pub emotional_state: String,
    pub insights: String,
}

#[derive(Debug, Clone)]
pub struct WriteJournalEntryResult {
    pub entry: Stored<JournalEntry>,
    /// After minus before.
    pub mood_change: i8,
    pub mood_shift: MoodShift,
}

pub struct WriteJournalEntryHandler {
    store: Arc<dyn RecordStore>,
}

impl WriteJournalEntryHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: WriteJournalEntryCommand,
    ) -> Result<WriteJournalEntryResult, JournalError> {
        let entry = JournalEntry::new(
            cmd.prompt,
            cmd.content,
            cmd.focus_area,
            cmd.mood_before,
            cmd.mood_after,
        )?
        .with_emotional_state(cmd.emotional_state)
        .with_insights(cmd.insights);

        let mood_change = entry.mood_change();
        let mood_shift = entry.mood_shift();
        let entry = save_item(self.store.as_ref(), &entry).await?;

        tracing::info!(
            record_id = %entry.id,
            focus_area = ?entry.item.focus_area,
            mood_change,
            "journal entry saved"
        );

        Ok(WriteJournalEntryResult {
            entry,
            mood_change,
            mood_shift,
        })
    }
}
