//! Record Store Port - append-only persistence for user records.
//!
//! Every saved item is wrapped in a [`Record`] envelope keyed by
//! [`RecordKind`] and creation time. Adapters never interpret the payload.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::cbt::ThoughtRecord;
use crate::domain::chat::ChatMessage;
use crate::domain::foundation::{RecordId, Stored, Timestamp};
use crate::domain::journal::{JournalEntry, MoodEntry};

/// Errors that can occur during record storage operations
#[derive(Debug, thiserror::Error)]
pub enum RecordStoreError {
    #[error("Failed to serialize record: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize {kind} record: {message}")]
    DeserializationFailed { kind: RecordKind, message: String },

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for RecordStoreError {
    fn from(err: std::io::Error) -> Self {
        RecordStoreError::IoError(err.to_string())
    }
}

/// Category of a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    ChatMessage,
    ThoughtRecord,
    JournalEntry,
    MoodEntry,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::ChatMessage,
        RecordKind::ThoughtRecord,
        RecordKind::JournalEntry,
        RecordKind::MoodEntry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::ChatMessage => "chat_message",
            RecordKind::ThoughtRecord => "thought_record",
            RecordKind::JournalEntry => "journal_entry",
            RecordKind::MoodEntry => "mood_entry",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain types that can be stored, each under a fixed kind.
pub trait RecordPayload: Serialize + DeserializeOwned {
    const KIND: RecordKind;
}

impl RecordPayload for ChatMessage {
    const KIND: RecordKind = RecordKind::ChatMessage;
}

impl RecordPayload for ThoughtRecord {
    const KIND: RecordKind = RecordKind::ThoughtRecord;
}

impl RecordPayload for JournalEntry {
    const KIND: RecordKind = RecordKind::JournalEntry;
}

impl RecordPayload for MoodEntry {
    const KIND: RecordKind = RecordKind::MoodEntry;
}

/// Envelope persisted by every adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub kind: RecordKind,
    pub created_at: Timestamp,
    pub payload: serde_json::Value,
}

impl Record {
    /// Wraps a domain value stamped with the current time.
    pub fn encode<T: RecordPayload>(item: &T) -> Result<Self, RecordStoreError> {
        Self::encode_at(item, Timestamp::now())
    }

    pub fn encode_at<T: RecordPayload>(item: &T, created_at: Timestamp) -> Result<Self, RecordStoreError> {
        let payload = serde_json::to_value(item)
            .map_err(|e| RecordStoreError::SerializationFailed(e.to_string()))?;
        Ok(Self {
            id: RecordId::new(),
            kind: T::KIND,
            created_at,
            payload,
        })
    }

    /// Decodes the payload back into its domain type.
    pub fn decode<T: RecordPayload>(&self) -> Result<Stored<T>, RecordStoreError> {
        if self.kind != T::KIND {
            return Err(RecordStoreError::DeserializationFailed {
                kind: self.kind,
                message: format!("expected {} payload", T::KIND),
            });
        }
        let item = serde_json::from_value(self.payload.clone()).map_err(|e| {
            RecordStoreError::DeserializationFailed {
                kind: self.kind,
                message: e.to_string(),
            }
        })?;
        Ok(Stored::new(self.id, self.created_at, item))
    }
}

/// Narrowing applied by [`RecordStore::query`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Only records created at or after this instant.
    pub since: Option<Timestamp>,
    /// Keep only the newest `limit` matches.
    pub limit: Option<usize>,
}

impl RecordFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn since(mut self, since: Timestamp) -> Self {
        self.since = Some(since);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Applies the filter to records of one kind, returned oldest first.
    pub fn apply(&self, mut records: Vec<Record>) -> Vec<Record> {
        if let Some(since) = self.since {
            records.retain(|r| !r.created_at.is_before(&since));
        }
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        if let Some(limit) = self.limit {
            let skip = records.len().saturating_sub(limit);
            records.drain(..skip);
        }
        records
    }
}

/// Port for saving and querying records
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Append a record.
    ///
    /// # Errors
    /// Returns `RecordStoreError` if the write fails
    async fn save(&self, record: Record) -> Result<(), RecordStoreError>;

    /// Records of `kind` matching `filter`, oldest first.
    async fn query(&self, kind: RecordKind, filter: RecordFilter) -> Result<Vec<Record>, RecordStoreError>;

    /// Remove every record of `kind`; returns how many were removed.
    async fn clear(&self, kind: RecordKind) -> Result<usize, RecordStoreError>;
}

/// Typed helpers over any [`RecordStore`].
pub async fn save_item<T: RecordPayload>(
    store: &dyn RecordStore,
    item: &T,
) -> Result<Stored<T>, RecordStoreError>
where
    T: Clone,
{
    let record = Record::encode(item)?;
    let stored = Stored::new(record.id, record.created_at, item.clone());
    store.save(record).await?;
    Ok(stored)
}

pub async fn load_items<T: RecordPayload>(
    store: &dyn RecordStore,
    filter: RecordFilter,
) -> Result<Vec<Stored<T>>, RecordStoreError> {
    store
        .query(T::KIND, filter)
        .await?
        .iter()
        .map(Record::decode)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Score;

    fn mood_record(value: u8, offset_secs: i64) -> Record {
        let entry = MoodEntry {
            overall_mood: Score::try_new(value).unwrap(),
            emotions: vec![],
            triggers: vec![],
        };
        Record::encode_at(&entry, Timestamp::now().plus_secs(offset_secs)).unwrap()
    }

    #[test]
    fn encode_decode_preserves_envelope() {
        let record = mood_record(7, 0);
        assert_eq!(record.kind, RecordKind::MoodEntry);

        let stored: Stored<MoodEntry> = record.decode().unwrap();
        assert_eq!(stored.id, record.id);
        assert_eq!(stored.item.overall_mood.value(), 7);
    }

    #[test]
    fn decode_rejects_wrong_kind() {
        let record = mood_record(7, 0);
        let err = record.decode::<JournalEntry>().unwrap_err();
        assert!(matches!(err, RecordStoreError::DeserializationFailed { .. }));
    }

    #[test]
    fn filter_limit_keeps_newest_oldest_first() {
        let records = vec![mood_record(3, 30), mood_record(1, 10), mood_record(2, 20)];
        let out = RecordFilter::all().limit(2).apply(records);
        let values: Vec<u8> = out
            .iter()
            .map(|r| r.decode::<MoodEntry>().unwrap().item.overall_mood.value())
            .collect();
        assert_eq!(values, vec![2, 3]);
    }

    #[test]
    fn filter_since_is_inclusive() {
        let anchor = Timestamp::now();
        let at_anchor = Record::encode_at(
            &MoodEntry {
                overall_mood: Score::NEUTRAL,
                emotions: vec![],
                triggers: vec![],
            },
            anchor,
        )
        .unwrap();
        let before = mood_record(1, -100);
        let out = RecordFilter::all().since(anchor).apply(vec![before, at_anchor.clone()]);
        assert_eq!(out, vec![at_anchor]);
    }

    #[test]
    fn record_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&RecordKind::ThoughtRecord).unwrap(),
            "\"thought_record\""
        );
        assert_eq!(RecordKind::JournalEntry.to_string(), "journal_entry");
    }
}
