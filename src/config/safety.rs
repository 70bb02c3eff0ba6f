//! Safety screen configuration
//!
//! Both tables default to the built-in ones. A custom table that fails to
//! load leaves its screen degraded rather than stopping the service.

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SafetyConfig {
    /// YAML crisis trigger table
    pub crisis_table_path: Option<PathBuf>,

    /// YAML distortion trigger table
    pub distortion_table_path: Option<PathBuf>,
}
