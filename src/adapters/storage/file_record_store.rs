//! File-based Record Store Adapter
//!
//! Appends records as JSON lines, one file per record kind:
//!
//! ```text
//! <data_dir>/chat_message.jsonl
//! <data_dir>/thought_record.jsonl
//! <data_dir>/journal_entry.jsonl
//! <data_dir>/mood_entry.jsonl
//! ```

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::ports::{Record, RecordFilter, RecordKind, RecordStore, RecordStoreError};

/// JSON-lines storage for records
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    base_path: PathBuf,
    /// Serialises writers so lines never interleave.
    write_lock: Arc<Mutex<()>>,
}

impl FileRecordStore {
    /// # Example
    /// ```ignore
    /// let store = FileRecordStore::new("./data/records");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn file_path(&self, kind: RecordKind) -> PathBuf {
        self.base_path.join(format!("{}.jsonl", kind.as_str()))
    }

    async fn read_all(&self, kind: RecordKind) -> Result<Vec<Record>, RecordStoreError> {
        let path = self.file_path(kind);
        let contents = match fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for (line_no, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<Record>(line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(
                        kind = %kind,
                        line = line_no + 1,
                        error = %e,
                        "skipping unreadable record line"
                    );
                }
            }
        }
        Ok(records)
    }
}

#[async_trait]
impl RecordStore for FileRecordStore {
    async fn save(&self, record: Record) -> Result<(), RecordStoreError> {
        let mut line = serde_json::to_string(&record)
            .map_err(|e| RecordStoreError::SerializationFailed(e.to_string()))?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;
        fs::create_dir_all(&self.base_path).await?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.file_path(record.kind))
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    async fn query(
        &self,
        kind: RecordKind,
        filter: RecordFilter,
    ) -> Result<Vec<Record>, RecordStoreError> {
        let _guard = self.write_lock.lock().await;
        let records = self.read_all(kind).await?;
        Ok(filter.apply(records))
    }

    async fn clear(&self, kind: RecordKind) -> Result<usize, RecordStoreError> {
        let _guard = self.write_lock.lock().await;
        let removed = self.read_all(kind).await?.len();
        match fs::remove_file(self.file_path(kind)).await {
            Ok(()) => Ok(removed),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e.into()),
        }
    }
}
