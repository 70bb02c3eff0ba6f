//! Record storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where records are kept
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Lost on restart
    #[default]
    Memory,
    /// One JSON-lines file per record kind
    File,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory for the file backend
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::File
            && self.data_dir.as_ref().map_or(true, |d| d.as_os_str().is_empty())
        {
            return Err(ValidationError::MissingRequired("STORAGE_DATA_DIR"));
        }
        Ok(())
    }
}
