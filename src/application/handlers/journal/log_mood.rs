//! LogMood command handler.

use std::sync::Arc;

use crate::domain::foundation::{Score, Stored};
use crate::domain::journal::MoodEntry;
use crate::ports::{save_item, RecordStore};

use super::JournalError;

#[derive(Debug, Clone)]
pub struct LogMoodCommand {
    pub overall_mood: Score,
    pub emotions: Vec<String>,
    pub triggers: Vec<String>,
}

pub struct LogMoodHandler {
    store: Arc<dyn RecordStore>,
}

impl LogMoodHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Saves a mood check-in; blank emotion and trigger labels are dropped.
    pub async fn handle(&self, cmd: LogMoodCommand) -> Result<Stored<MoodEntry>, JournalError> {
        let entry = MoodEntry {
            overall_mood: cmd.overall_mood,
            emotions: clean_labels(cmd.emotions),
            triggers: clean_labels(cmd.triggers),
        };
        let stored = save_item(self.store.as_ref(), &entry).await?;
        tracing::info!(
            record_id = %stored.id,
            overall_mood = entry.overall_mood.value(),
            "mood logged"
        );
        Ok(stored)
    }
}

fn clean_labels(labels: Vec<String>) -> Vec<String> {
    labels
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryRecordStore;
    use crate::ports::RecordKind;

    #[tokio::test]
    async fn saves_cleaned_entry() {
        let store = InMemoryRecordStore::new();
        let stored = LogMoodHandler::new(Arc::new(store.clone()))
            .handle(LogMoodCommand {
                overall_mood: Score::try_new(3).unwrap(),
                emotions: vec![" sad ".into(), "".into()],
                triggers: vec!["exams".into()],
            })
            .await
            .unwrap();

        assert_eq!(stored.item.emotions, vec!["sad".to_string()]);
        assert_eq!(stored.item.triggers, vec!["exams".to_string()]);
        assert_eq!(store.count(RecordKind::MoodEntry).await, 1);
    }
}
