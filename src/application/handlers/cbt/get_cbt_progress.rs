//! GetCbtProgress query handler.

use std::sync::Arc;

use crate::domain::cbt::{CbtProgress, ThoughtRecord};
use crate::ports::{load_items, RecordFilter, RecordStore};

use super::CbtError;

pub struct GetCbtProgressHandler {
    store: Arc<dyn RecordStore>,
}

impl GetCbtProgressHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<CbtProgress, CbtError> {
        let records = load_items::<ThoughtRecord>(self.store.as_ref(), RecordFilter::all()).await?;
        Ok(CbtProgress::summarize(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryRecordStore;
    use crate::domain::foundation::Score;
    use crate::ports::save_item;

    #[tokio::test]
    async fn summarises_stored_records() {
        let store = InMemoryRecordStore::new();
        for (before, after) in [(8, 4), (5, 6)] {
            let record = ThoughtRecord::new(
                "s",
                "t",
                Score::try_new(before).unwrap(),
                Score::try_new(after).unwrap(),
            )
            .unwrap();
            save_item(&store, &record).await.unwrap();
        }

        let progress = GetCbtProgressHandler::new(Arc::new(store))
            .handle()
            .await
            .unwrap();

        assert_eq!(progress.total_records, 2);
        assert!((progress.average_improvement - 1.5).abs() < f64::EPSILON);
        assert!((progress.success_rate - 50.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn empty_store_gives_zero_progress() {
        let progress = GetCbtProgressHandler::new(Arc::new(InMemoryRecordStore::new()))
            .handle()
            .await
            .unwrap();
        assert_eq!(progress.total_records, 0);
    }
}
