//! Persisted item wrapper.

use serde::{Deserialize, Serialize};

use super::{RecordId, Timestamp};

/// A domain value together with the identity and time it was saved under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<T> {
    pub id: RecordId,
    pub created_at: Timestamp,
    #[serde(flatten)]
    pub item: T,
}

impl<T> Stored<T> {
    pub fn new(id: RecordId, created_at: Timestamp, item: T) -> Self {
        Self { id, created_at, item }
    }
}
