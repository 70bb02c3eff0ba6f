//! ListJournalEntries query handler.

use std::sync::Arc;

use crate::domain::foundation::{Stored, Timestamp};
use crate::domain::journal::{FocusArea, JournalEntry};
use crate::ports::{load_items, RecordFilter, RecordStore};

use super::JournalError;

/// Filters for listing journal entries.
#[derive(Debug, Clone, Default)]
pub struct ListJournalEntriesQuery {
    pub focus_area: Option<FocusArea>,
    /// Case-insensitive match against prompt and content.
    pub search: Option<String>,
    /// Only entries from the last `n` days.
    pub since_days: Option<i64>,
    /// Newest matches to return; all when `None`.
    pub limit: Option<usize>,
}

/// Returns matching entries newest first.
pub struct ListJournalEntriesHandler {
    store: Arc<dyn RecordStore>,
}

impl ListJournalEntriesHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: ListJournalEntriesQuery,
    ) -> Result<Vec<Stored<JournalEntry>>, JournalError> {
        let mut filter = RecordFilter::all();
        if let Some(days) = query.since_days {
            filter = filter.since(Timestamp::now().minus_days(days));
        }

        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let mut entries: Vec<Stored<JournalEntry>> =
            load_items::<JournalEntry>(self.store.as_ref(), filter)
                .await?
                .into_iter()
                .filter(|e| query.focus_area.map_or(true, |f| e.item.focus_area == f))
                .filter(|e| search.map_or(true, |s| e.item.mentions(s)))
                .collect();

        entries.reverse();
        if let Some(limit) = query.limit {
            entries.truncate(limit);
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryRecordStore;
    use crate::domain::foundation::Score;
    use crate::ports::Record;

    async fn seed(store: &InMemoryRecordStore, content: &str, area: FocusArea, days_ago: i64) {
        let entry =
            JournalEntry::new("prompt", content, area, Score::NEUTRAL, Score::NEUTRAL).unwrap();
        let record = Record::encode_at(&entry, Timestamp::now().minus_days(days_ago)).unwrap();
        store.save(record).await.unwrap();
    }

    async fn fixture() -> InMemoryRecordStore {
        let store = InMemoryRecordStore::new();
        seed(&store, "Thankful for my dog", FocusArea::Gratitude, 20).await;
        seed(&store, "Set a goal to run", FocusArea::Goals, 3).await;
        seed(&store, "Grateful for sunshine", FocusArea::Gratitude, 1).await;
        store
    }

    #[tokio::test]
    async fn lists_newest_first() {
        let store = fixture().await;
        let entries = ListJournalEntriesHandler::new(Arc::new(store))
            .handle(ListJournalEntriesQuery::default())
            .await
            .unwrap();

        let contents: Vec<_> = entries.iter().map(|e| e.item.content.as_str()).collect();
        assert_eq!(
            contents,
            vec!["Grateful for sunshine", "Set a goal to run", "Thankful for my dog"]
        );
    }

    #[tokio::test]
    async fn filters_by_focus_area_and_search() {
        let store = fixture().await;
        let handler = ListJournalEntriesHandler::new(Arc::new(store));

        let gratitude = handler
            .handle(ListJournalEntriesQuery {
                focus_area: Some(FocusArea::Gratitude),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(gratitude.len(), 2);

        let dog = handler
            .handle(ListJournalEntriesQuery {
                search: Some("DOG".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(dog.len(), 1);
    }

    #[tokio::test]
    async fn filters_by_recent_days() {
        let store = fixture().await;
        let recent = ListJournalEntriesHandler::new(Arc::new(store))
            .handle(ListJournalEntriesQuery {
                since_days: Some(7),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(recent.len(), 2);
    }

    #[tokio::test]
    async fn limit_keeps_newest() {
        let store = fixture().await;
        let entries = ListJournalEntriesHandler::new(Arc::new(store))
            .handle(ListJournalEntriesQuery {
                limit: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].item.content, "Grateful for sunshine");
    }

    #[tokio::test]
    async fn blank_search_matches_everything() {
        let store = fixture().await;
        let entries = ListJournalEntriesHandler::new(Arc::new(store))
            .handle(ListJournalEntriesQuery {
                search: Some("   ".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(entries.len(), 3);
    }
}
