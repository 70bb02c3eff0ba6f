//! Chat history queries and clearing.

use std::sync::Arc;

use crate::domain::chat::ChatMessage;
use crate::domain::foundation::Stored;
use crate::ports::{load_items, RecordFilter, RecordKind, RecordStore};

use super::ChatError;

/// Query for stored chat turns.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetChatHistoryQuery {
    /// Newest turns to return; all when `None`.
    pub limit: Option<usize>,
}

/// Returns stored turns oldest first.
pub struct GetChatHistoryHandler {
    store: Arc<dyn RecordStore>,
}

impl GetChatHistoryHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetChatHistoryQuery,
    ) -> Result<Vec<Stored<ChatMessage>>, ChatError> {
        let filter = RecordFilter {
            since: None,
            limit: query.limit,
        };
        Ok(load_items(self.store.as_ref(), filter).await?)
    }
}

/// Deletes every stored chat turn.
pub struct ClearChatHistoryHandler {
    store: Arc<dyn RecordStore>,
}

impl ClearChatHistoryHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Returns the number of turns removed.
    pub async fn handle(&self) -> Result<usize, ChatError> {
        let removed = self.store.clear(RecordKind::ChatMessage).await?;
        tracing::info!(removed, "chat history cleared");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryRecordStore;
    use crate::ports::save_item;

    #[tokio::test]
    async fn history_is_oldest_first_and_limited() {
        let store = InMemoryRecordStore::new();
        for text in ["one", "two", "three"] {
            save_item(&store, &ChatMessage::user(text).unwrap()).await.unwrap();
        }
        let handler = GetChatHistoryHandler::new(Arc::new(store.clone()));

        let all = handler.handle(GetChatHistoryQuery::default()).await.unwrap();
        assert_eq!(all.len(), 3);

        let last_two = handler
            .handle(GetChatHistoryQuery { limit: Some(2) })
            .await
            .unwrap();
        assert_eq!(last_two.len(), 2);
        assert_eq!(last_two[1].item.content, all[2].item.content);
    }

    #[tokio::test]
    async fn clear_reports_removed_count() {
        let store = InMemoryRecordStore::new();
        save_item(&store, &ChatMessage::user("hi").unwrap()).await.unwrap();

        let removed = ClearChatHistoryHandler::new(Arc::new(store.clone()))
            .handle()
            .await
            .unwrap();

        assert_eq!(removed, 1);
        assert_eq!(store.count(RecordKind::ChatMessage).await, 0);
    }
}
