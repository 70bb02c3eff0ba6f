//! In-Memory Record Store Adapter
//!
//! Keeps records in memory, grouped by kind. Used for tests and for the
//! `memory` storage backend.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{Record, RecordFilter, RecordKind, RecordStore, RecordStoreError};

/// In-memory storage for records
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Arc<RwLock<HashMap<RecordKind, Vec<Record>>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records of `kind`.
    pub async fn count(&self, kind: RecordKind) -> usize {
        self.records
            .read()
            .await
            .get(&kind)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn save(&self, record: Record) -> Result<(), RecordStoreError> {
        let mut records = self.records.write().await;
        records.entry(record.kind).or_default().push(record);
        Ok(())
    }

    async fn query(
        &self,
        kind: RecordKind,
        filter: RecordFilter,
    ) -> Result<Vec<Record>, RecordStoreError> {
        let records = self.records.read().await;
        let matching = records.get(&kind).cloned().unwrap_or_default();
        Ok(filter.apply(matching))
    }

    async fn clear(&self, kind: RecordKind) -> Result<usize, RecordStoreError> {
        let mut records = self.records.write().await;
        Ok(records.remove(&kind).map(|r| r.len()).unwrap_or(0))
    }
}
